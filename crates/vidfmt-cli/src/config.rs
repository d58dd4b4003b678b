//! Environment configuration.
//!
//! | variable | meaning |
//! |----------|---------|
//! | `VIDFMT_LOG` | `tracing` filter directive, e.g. `debug` or `vidfmt_core=trace` |
//! | `VIDFMT_ALIGN` | default line alignment for `layout` |

use std::env;
use tracing::{debug, warn};

/// Log filter variable.
pub const LOG_ENV: &str = "VIDFMT_LOG";

/// Default alignment variable.
pub const ALIGN_ENV: &str = "VIDFMT_ALIGN";

/// Alignment used when neither `--align` nor `VIDFMT_ALIGN` is given.
pub const DEFAULT_ALIGN: usize = 1;

/// Line alignment: command-line value, then `VIDFMT_ALIGN`, then
/// [`DEFAULT_ALIGN`].
pub fn line_align(cli: Option<usize>) -> usize {
    if let Some(align) = cli {
        return align;
    }
    match env::var(ALIGN_ENV) {
        Ok(raw) => match parse_align(&raw) {
            Some(align) => {
                debug!(align, "line alignment from {ALIGN_ENV}");
                align
            }
            None => {
                warn!(value = %raw, "ignoring {ALIGN_ENV}: not a power of two");
                DEFAULT_ALIGN
            }
        },
        Err(_) => DEFAULT_ALIGN,
    }
}

fn parse_align(raw: &str) -> Option<usize> {
    raw.trim()
        .parse()
        .ok()
        .filter(|a: &usize| a.is_power_of_two())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_align() {
        assert_eq!(parse_align("64"), Some(64));
        assert_eq!(parse_align(" 16\n"), Some(16));
        assert_eq!(parse_align("1"), Some(1));
        assert_eq!(parse_align("0"), None);
        assert_eq!(parse_align("24"), None);
        assert_eq!(parse_align("-8"), None);
        assert_eq!(parse_align("wide"), None);
    }

    #[test]
    fn test_cli_value_wins() {
        assert_eq!(line_align(Some(32)), 32);
    }

    /// Only this test touches `VIDFMT_ALIGN`; every other caller passes an
    /// explicit alignment.
    #[test]
    fn test_env_override() {
        let saved = env::var(ALIGN_ENV).ok();

        // SAFETY: no other test reads or writes this variable.
        unsafe { env::set_var(ALIGN_ENV, "64") };
        assert_eq!(line_align(None), 64);
        assert_eq!(line_align(Some(8)), 8);

        unsafe { env::set_var(ALIGN_ENV, "24") };
        assert_eq!(line_align(None), DEFAULT_ALIGN);

        unsafe { env::remove_var(ALIGN_ENV) };
        assert_eq!(line_align(None), DEFAULT_ALIGN);

        if let Some(value) = saved {
            unsafe { env::set_var(ALIGN_ENV, value) };
        }
    }
}
