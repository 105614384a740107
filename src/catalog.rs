//! # Recommendation Catalog
//!
//! Static guidance text keyed by defect-category label. Lookup is an exact,
//! case-sensitive match; any other label gets the generic maintenance list.

/// Guidance for the general case, returned for unlisted categories.
pub const GENERIC_MAINTENANCE: &[&str] = &[
    "Schedule a routine inspection by a qualified building professional.",
    "Keep gutters, downspouts and drainage paths clear of debris.",
    "Record the location and size of any defect so changes can be tracked over time.",
];

const CATALOG: &[(&str, &[&str])] = &[
    (
        "Serious Concrete Damage",
        &[
            "Engage a licensed structural engineer to assess load-bearing capacity as soon as possible.",
            "Restrict access to the affected area until the structure has been evaluated.",
            "Check for exposed or corroded reinforcement bars and treat them before patching.",
            "Repair spalled concrete with a structural-grade repair mortar.",
            "Identify and fix the source of water ingress that accelerates deterioration.",
        ],
    ),
    (
        "Large Crack Found",
        &[
            "Have a structural engineer determine whether the crack is still moving.",
            "Install crack monitors and record the width weekly for at least one month.",
            "Seal stable cracks with epoxy injection to restore continuity.",
            "Inspect the foundation and nearby soil for settlement or erosion.",
        ],
    ),
    (
        "Small Hairline Crack/s",
        &[
            "Fill hairline cracks with a flexible elastomeric sealant.",
            "Repaint sealed areas with a breathable, crack-bridging coating.",
            "Re-inspect every six months to confirm the cracks are not widening.",
        ],
    ),
    (
        "Paint Peeling or Flaking",
        &[
            "Scrape off loose paint and sand the edges smooth.",
            "Locate and correct any moisture source behind the painted surface.",
            "Apply a suitable primer before repainting with an exterior-grade paint.",
        ],
    ),
    (
        "Algae/Moss Growth",
        &[
            "Clean affected surfaces with a biocide wash or a diluted bleach solution.",
            "Improve drainage and ventilation to reduce persistent dampness.",
            "Trim vegetation that shades the wall and traps moisture.",
            "Apply a water-repellent or anti-fungal coating after cleaning.",
        ],
    ),
];

/// Ordered, non-empty guidance for a defect category.
pub fn guidance_for(category_label: &str) -> &'static [&'static str] {
    CATALOG
        .iter()
        .find(|(label, _)| *label == category_label)
        .map(|(_, guidance)| *guidance)
        .unwrap_or(GENERIC_MAINTENANCE)
}
