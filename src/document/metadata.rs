//! RDF / Dublin Core licensing block.

use crate::document::tree::Element;

pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";
pub const CC_NS: &str = "http://creativecommons.org/ns#";
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Base of the licence term URIs; distinct from the `cc` XML namespace.
const CC_TERMS: &str = "https://creativecommons.org/ns#";
const LICENSE_URL: &str = "https://creativecommons.org/licenses/by-nc/4.0/";

/// Attribution fields written into the `cc:Work` node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkInfo {
    pub title: &'static str,
    pub creator: &'static str,
    pub identifier: &'static str,
    pub description: &'static str,
    pub rights: &'static str,
    pub language: &'static str,
}

pub const DEFAULT_WORK: WorkInfo = WorkInfo {
    title: "Matrix Rain Glyph Cascade",
    creator: "Shane Macaulay (K2)",
    identifier: "https://github.com/K2",
    description: "Animated matrix-style glyph rainfall generated via DeepSeek-OCR assets pipeline.",
    rights: "© 2025 Shane Macaulay (K2) — Noncommercial use only. Contact ktwo@ktwo.ca.",
    language: "en",
};

fn resource(name: &str, url: &str) -> Element {
    Element::new(name).attr("rdf:resource", url)
}

pub fn build_metadata(work: &WorkInfo) -> Element {
    let work_node = Element::new("cc:Work")
        .attr("rdf:about", "")
        .child(Element::new("dc:title").text(work.title))
        .child(Element::new("dc:creator").text(work.creator))
        .child(Element::new("dc:identifier").text(work.identifier))
        .child(Element::new("dc:description").text(work.description))
        .child(Element::new("dc:rights").text(work.rights))
        .child(Element::new("dc:language").text(work.language))
        .child(resource("cc:license", LICENSE_URL));

    let mut license = Element::new("cc:License").attr("rdf:about", LICENSE_URL);
    for permit in ["Reproduction", "Distribution", "DerivativeWorks"] {
        license.push(resource("cc:permits", &format!("{CC_TERMS}{permit}")));
    }
    license.push(resource("cc:requires", &format!("{CC_TERMS}Attribution")));
    license.push(resource("cc:prohibits", &format!("{CC_TERMS}CommercialUse")));

    Element::new("metadata").child(
        Element::new("rdf:RDF")
            .child(work_node)
            .child(license),
    )
}
