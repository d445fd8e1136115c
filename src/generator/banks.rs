//! Static word banks for name synthesis.
//!
//! The lists, their order, and their lengths are part of the reproducibility
//! contract: a seed indexes into them, so any edit changes the output of every
//! existing seed.

pub static PREFIXES: &[&str] = &[
    "App", "Web", "Net", "Dev", "Tech", "Code", "Byte", "Bit", "Digi", "Cyber", "Data", "Flow",
    "Sync", "Swift", "Pulse", "Node", "Logic", "Smart", "Clear", "Fast", "Pixel", "Flux", "Meta",
    "Echo", "Vibe", "Lens", "Boost", "Spark", "Core", "Atom", "Quik", "Apex", "Next", "Prime",
    "Aura", "Nexus", "Vital", "Hyper", "Ultra", "Alpha", "Nova", "Titan", "Mega", "Beta", "Cloud",
    "Turbo", "Blitz", "Zeta", "Evo", "Quantum",
];

pub static MIDDLES: &[&str] = &[
    "Flow", "Hub", "Link", "Sync", "Mind", "Core", "Wave", "Pulse", "Node", "Base", "Sphere",
    "Space", "Cloud", "Loop", "Stack", "Logic", "Data", "Grid", "Net", "Path", "Stream", "Pixel",
    "Fusion", "Bridge", "Chain", "Forge", "Drive", "Edge", "Trace", "Connect", "Matrix", "Channel",
    "Thread", "Scope", "Hive", "Vault", "Echo", "Shift", "Beacon", "Junction",
];

pub static SUFFIXES: &[&str] = &[
    "ly", "ify", "ize", "ium", "ible", "able", "ics", "hub", "lab", "tech", "ware", "edge", "wire",
    "sync", "spot", "dash", "base", "port", "cast", "lift", "zen", "axis", "era", "vista", "nova",
    "flux", "scape", "forge", "verse", "guard", "quest", "mind", "pulse", "grid", "scope", "vision",
    "blend", "surge", "wave", "glow", "mesh", "craft", "orbit", "nexus", "boost", "peak", "realm",
    "flow", "leap", "zone",
];

pub static COMPOUNDS: &[&str] = &[
    "Lab", "Hub", "Net", "Flow", "Wave", "Forge", "Stack", "Box", "Link", "Craft", "Sphere",
    "Mind", "Cloud", "Connect", "Space", "Works", "Zone", "Logic", "Ware", "Engine", "Bridge",
    "Drive", "Beam", "Loop", "Chain", "Atlas", "Nexus", "Pulse", "Vector", "Beacon", "Scope",
    "Spark", "Grove", "Track", "Hive", "Vista", "Core", "Port", "Vault", "Matrix",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_sizes_are_locked() {
        assert_eq!(PREFIXES.len(), 50);
        assert_eq!(MIDDLES.len(), 40);
        assert_eq!(SUFFIXES.len(), 50);
        assert_eq!(COMPOUNDS.len(), 40);
    }

    #[test]
    fn test_banks_contain_no_empty_entries() {
        for bank in [PREFIXES, MIDDLES, SUFFIXES, COMPOUNDS] {
            assert!(bank.iter().all(|w| !w.is_empty()));
        }
    }
}
