use std::collections::BTreeSet;

use super::value_objects::TermId;

/// Developmental layer slims.
const DEVELOPMENTAL: &[(&str, &str)] = &[
    ("UBERON:0003263", "mesoderm"),
    ("UBERON:0000924", "ectoderm"),
    ("UBERON:0000925", "endoderm"),
];

/// Body system slims.
const SYSTEM: &[(&str, &str)] = &[
    ("UBERON:0000383", "musculature of body"),
    ("UBERON:0000949", "endocrine system"),
    ("UBERON:0000990", "reproductive system"),
    ("UBERON:0001004", "respiratory system"),
    ("UBERON:0001007", "digestive system"),
    ("UBERON:0001008", "excretory system"),
    ("UBERON:0001009", "circulatory system"),
    ("UBERON:0001434", "skeletal system"),
    ("UBERON:0002405", "immune system"),
    ("UBERON:0002416", "integumental system"),
    ("UBERON:0001032", "sensory system"),
    ("UBERON:0001017", "central nervous system"),
    ("UBERON:0000010", "peripheral nervous system"),
];

/// Organ slims.
const ORGAN: &[(&str, &str)] = &[
    ("UBERON:0002369", "adrenal gland"),
    ("UBERON:0002110", "gallbladder"),
    ("UBERON:0002106", "spleen"),
    ("UBERON:0001173", "billary tree"),
    ("UBERON:0001043", "esophagus"),
    ("UBERON:0000004", "nose"),
    ("UBERON:0000056", "ureter"),
    ("UBERON:0000057", "urethra"),
    ("UBERON:0000059", "large intestine"),
    ("UBERON:0000165", "mouth"),
    ("UBERON:0000945", "stomach"),
    ("UBERON:0000948", "heart"),
    ("UBERON:0000955", "brain"),
    ("UBERON:0000970", "eye"),
    ("UBERON:0000991", "gonad"),
    ("UBERON:0001255", "urinary bladder"),
    ("UBERON:0001264", "pancreas"),
    ("UBERON:0001474", "bone element"),
    ("UBERON:0002003", "peripheral nerve"),
    ("UBERON:0002048", "lung"),
    ("UBERON:0002097", "skin of body"),
    ("UBERON:0002107", "liver"),
    ("UBERON:0002108", "small intestine"),
    ("UBERON:0002113", "kidney"),
    ("UBERON:0002240", "spinal cord"),
    ("UBERON:0002367", "prostate gland"),
    ("UBERON:0002370", "thymus"),
    ("UBERON:0003126", "trachea"),
    ("UBERON:0001723", "tongue"),
    ("UBERON:0001737", "larynx"),
    ("UBERON:0006562", "pharynx"),
    ("UBERON:0001103", "diaphragm"),
    ("UBERON:0002185", "bronchus"),
    ("UBERON:0000029", "lymph node"),
    ("UBERON:0002391", "lymph"),
    ("UBERON:0010133", "neuroendocrine gland"),
    ("UBERON:0001132", "parathyroid gland"),
    ("UBERON:0002046", "thyroid gland"),
    ("UBERON:0001981", "blood vessel"),
    ("UBERON:0001473", "lymphatic vessel"),
    ("UBERON:0000178", "blood"),
    ("UBERON:0002268", "olfactory organ"),
    ("UBERON:0007844", "cartilage element"),
    ("UBERON:0001690", "ear"),
    ("UBERON:0001987", "placenta"),
    ("UBERON:0001911", "mammary gland"),
    ("UBERON:0001630", "muscle organ"),
    ("UBERON:0000007", "pituitary gland"),
    ("UBERON:0000478", "extraembryonic structure"),
];

fn labels_from(table: &[(&str, &'static str)], closure: &BTreeSet<TermId>) -> Vec<&'static str> {
    let members: BTreeSet<&str> = closure.iter().map(TermId::as_str).collect();
    table
        .iter()
        .filter(|(id, _)| members.contains(id))
        .map(|(_, label)| *label)
        .collect()
}

/// Developmental layer labels whose key term appears in the closure.
#[must_use]
pub fn developmental_slims(closure: &BTreeSet<TermId>) -> Vec<&'static str> {
    labels_from(DEVELOPMENTAL, closure)
}

/// Body system labels whose key term appears in the closure.
#[must_use]
pub fn system_slims(closure: &BTreeSet<TermId>) -> Vec<&'static str> {
    labels_from(SYSTEM, closure)
}

/// Organ labels whose key term appears in the closure.
#[must_use]
pub fn organ_slims(closure: &BTreeSet<TermId>) -> Vec<&'static str> {
    labels_from(ORGAN, closure)
}

/// Every slim label matched by the closure, across all three categories.
#[must_use]
pub fn all_slims(closure: &BTreeSet<TermId>) -> BTreeSet<String> {
    developmental_slims(closure)
        .into_iter()
        .chain(system_slims(closure))
        .chain(organ_slims(closure))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{all_slims, developmental_slims, organ_slims, system_slims};
    use crate::ontology::value_objects::TermId;

    fn closure(ids: &[&str]) -> BTreeSet<TermId> {
        ids.iter()
            .map(|id| TermId::new(*id).expect("valid id"))
            .collect()
    }

    #[test]
    fn labels_appear_iff_their_key_is_in_the_closure() {
        let closure = closure(&["UBERON:0000924", "UBERON:0000948", "UBERON:0009999"]);
        assert_eq!(developmental_slims(&closure), vec!["ectoderm"]);
        assert_eq!(organ_slims(&closure), vec!["heart"]);
        assert!(system_slims(&closure).is_empty());

        let all = all_slims(&closure);
        assert_eq!(all.len(), 2);
        assert!(all.contains("ectoderm"));
        assert!(all.contains("heart"));
    }

    #[test]
    fn empty_closure_matches_nothing() {
        assert!(all_slims(&BTreeSet::new()).is_empty());
    }
}
