mod proptest_engine;

use std::sync::OnceLock;

use crate::Engine;

pub(super) fn engine() -> &'static Engine {
    static ENGINE: OnceLock<Engine> = OnceLock::new();
    ENGINE.get_or_init(Engine::new)
}
