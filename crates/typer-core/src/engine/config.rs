/// Maximum number of typing passes before the run gives up on convergence.
pub const DEFAULT_MAX_PASSES: usize = 10;

/// Ring length used by the aromaticity-proxy rules (benzene, biphenyl).
pub const DEFAULT_AROMATIC_RING_SIZE: usize = 6;

/// Parameters of a typing run.
///
/// The defaults reproduce the reference OPLS-aa behavior; the knobs exist
/// mainly so tests can tighten the pass cap and probe non-convergence
/// handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TyperConfig {
    /// Upper bound on fixed-point passes over the graph.
    pub max_passes: usize,
    /// Maximum path length used when searching for aromatic rings.
    pub aromatic_ring_size: usize,
}

impl Default for TyperConfig {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
            aromatic_ring_size: DEFAULT_AROMATIC_RING_SIZE,
        }
    }
}

impl TyperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    pub fn with_aromatic_ring_size(mut self, aromatic_ring_size: usize) -> Self {
        self.aromatic_ring_size = aromatic_ring_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let config = TyperConfig::default();
        assert_eq!(config.max_passes, 10);
        assert_eq!(config.aromatic_ring_size, 6);
    }

    #[test]
    fn with_modifiers_override_fields() {
        let config = TyperConfig::new()
            .with_max_passes(3)
            .with_aromatic_ring_size(5);
        assert_eq!(config.max_passes, 3);
        assert_eq!(config.aromatic_ring_size, 5);
    }
}
