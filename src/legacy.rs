use crate::block_state::BlockState;

/// Resolves a legacy numeric block identifier to a canonical block state.
///
/// Implementations must be total over `id` in `0..=4095` and any `data`
/// byte: historical files reference blocks that were later removed, so an
/// unrecognized pair resolves to some fallback state instead of failing.
pub trait LegacyIdResolver {
    fn resolve(&self, id: u16, data: u8) -> BlockState;
}

/// Fallback resolver that carries the numeric identity through unchanged,
/// for use when no real block-state registry is wired up.
pub struct NumericResolver;

impl LegacyIdResolver for NumericResolver {
    fn resolve(&self, id: u16, data: u8) -> BlockState {
        let state = BlockState::new(format!("legacy:{}", id));
        if data == 0 {
            state
        } else {
            state.with_property("data".to_string(), data.to_string())
        }
    }
}
