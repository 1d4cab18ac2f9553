#![allow(dead_code)]

/// Sets environment variables for the lifetime of the guard and restores
/// the previous values on drop. Callers must be `#[serial]`.
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for (key, value) in pairs {
            restores.push((key.to_string(), std::env::var(key).ok()));
            // SAFETY: tests touching the environment run serially
            unsafe { std::env::set_var(key, value) };
        }
        EnvGuard { restores }
    }

    pub fn clear(keys: &[&str]) -> Self {
        let mut restores = Vec::new();
        for key in keys {
            restores.push((key.to_string(), std::env::var(key).ok()));
            // SAFETY: tests touching the environment run serially
            unsafe { std::env::remove_var(key) };
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            // SAFETY: tests touching the environment run serially
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

pub const CONFIG_KEYS: &[&str] = &[
    "POKERBOTS_CONFIG",
    "POKERBOTS_STARTING_STACK",
    "POKERBOTS_SMALL_BLIND",
    "POKERBOTS_SEED",
    "POKERBOTS_ROUNDS",
    "POKERBOTS_P1",
    "POKERBOTS_P2",
];

pub struct CliOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliOutput {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut argv = vec!["pokerbots"];
    argv.extend_from_slice(args);
    let code = pokerbots_cli::run(argv, &mut out, &mut err);
    CliOutput {
        code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}
