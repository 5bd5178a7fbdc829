// Tests that mutate process environment variables.
//
// `set_var`/`remove_var` race with any concurrent `getenv`, so this binary
// holds no HTTP clients and every test takes `lock_env` first.


use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
