use super::types::UnhandledMem;
use super::Memory;

/// Cached env-var flag: returns `true` only when the env var is set to `"1"`.
macro_rules! env_bool_eq1 {
    ($name:ident, $var:expr) => {
        #[inline]
        pub(crate) fn $name() -> bool {
            use std::sync::OnceLock;
            static V: OnceLock<bool> = OnceLock::new();
            *V.get_or_init(|| matches!(std::env::var($var), Ok(v) if v == "1"))
        }
    };
}

impl Memory {
    // Debug knobs. Both pick between behaviors with identical observable
    // semantics; the equivalence is covered by the property tests.
    env_bool_eq1!(env_lazy_slot_resolve, "M65_LAZY_SLOT_RESOLVE");
    env_bool_eq1!(env_full_map_invalidate, "M65_FULL_MAP_INVALIDATE");

    /// Default unhandled-memory policy, `M65_UNHANDLED_MEM=<0..3>`.
    pub(crate) fn env_unhandled_mem() -> Option<UnhandledMem> {
        use std::sync::OnceLock;
        static V: OnceLock<Option<UnhandledMem>> = OnceLock::new();
        *V.get_or_init(|| {
            std::env::var("M65_UNHANDLED_MEM")
                .ok()
                .and_then(|s| s.parse::<u8>().ok())
                .and_then(UnhandledMem::from_level)
        })
    }
}
