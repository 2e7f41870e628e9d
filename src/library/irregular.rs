use super::IrregularSlot;

const fn slot(offset: f64, phase_shift: f64, fall_scale: f64, opacity_scale: f64) -> IrregularSlot {
    IrregularSlot {
        offset,
        phase_shift,
        fall_scale,
        opacity_scale,
    }
}

pub const IRREGULAR_SLOTS: [IrregularSlot; 12] = [
    slot(12.0, 0.85, 1.18, 1.12),
    slot(53.0, -0.6, 0.82, 0.86),
    slot(97.0, 1.4, 1.35, 1.3),
    slot(141.0, -1.15, 0.87, 0.9),
    slot(176.0, 0.32, 1.26, 1.18),
    slot(219.0, 1.92, 0.79, 0.82),
    slot(263.0, -0.78, 1.32, 1.24),
    slot(298.0, 1.28, 0.9, 0.88),
    slot(336.0, -0.42, 1.24, 1.16),
    slot(371.0, 0.96, 0.84, 0.84),
    slot(413.0, -1.48, 1.29, 1.22),
    slot(452.0, 1.61, 0.93, 0.9),
];
