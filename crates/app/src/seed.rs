//! Session seed selection.
//!
//! An explicit `--seed` on the command line pins the session for
//! reproduction; without it a fresh 32-bit value is mixed from runtime
//! entropy. The engine takes the seed as a plain u32 either way.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Resolve the seed for a new session from the raw argument list.
pub fn session_seed(args: &[String]) -> Result<u32, String> {
    Ok(match seed_from_args(args)? {
        Some(seed) => seed,
        None => random_seed(),
    })
}

/// Extract `--seed <n>` or `--seed=<n>`. `Ok(None)` when the flag is
/// absent; a duplicate, valueless, or non-u32 flag is an error.
pub fn seed_from_args(args: &[String]) -> Result<Option<u32>, String> {
    let mut found: Option<u32> = None;
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        let value = if arg == "--seed" {
            match iter.next() {
                Some(next) => next.as_str(),
                None => return Err("--seed needs a value".to_string()),
            }
        } else if let Some(inline) = arg.strip_prefix("--seed=") {
            inline
        } else {
            continue;
        };

        if found.is_some() {
            return Err("--seed given more than once".to_string());
        }
        let parsed = value
            .parse::<u32>()
            .map_err(|_| format!("bad seed '{value}': expected a number below 2^32"))?;
        found = Some(parsed);
    }

    Ok(found)
}

static SEED_SALT: AtomicU32 = AtomicU32::new(0);

/// A fresh seed from the wall clock, the process id, and a per-call
/// salt, scrambled so consecutive calls land far apart.
pub fn random_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0_u128, |duration| duration.as_nanos());
    let clock = (now as u32) ^ ((now >> 32) as u32) ^ ((now >> 64) as u32);
    let salt = SEED_SALT.fetch_add(1, Ordering::Relaxed);

    scramble(clock ^ std::process::id().rotate_left(13) ^ salt.wrapping_mul(0x9E37_79B9))
}

fn scramble(mut value: u32) -> u32 {
    value ^= value >> 16;
    value = value.wrapping_mul(0x85EB_CA6B);
    value ^= value >> 13;
    value = value.wrapping_mul(0xC2B2_AE35);
    value ^ (value >> 16)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| (*part).to_string()).collect()
    }

    #[test]
    fn no_flag_means_no_pinned_seed() {
        assert_eq!(seed_from_args(&args(&["wordsnake"])), Ok(None));
        assert_eq!(seed_from_args(&args(&["wordsnake", "--fullscreen"])), Ok(None));
    }

    #[test]
    fn both_flag_spellings_parse() {
        assert_eq!(seed_from_args(&args(&["wordsnake", "--seed", "77"])), Ok(Some(77)));
        assert_eq!(seed_from_args(&args(&["wordsnake", "--seed=901"])), Ok(Some(901)));
    }

    #[test]
    fn malformed_flags_are_rejected() {
        for bad in [
            vec!["wordsnake", "--seed"],
            vec!["wordsnake", "--seed=snake"],
            vec!["wordsnake", "--seed=1", "--seed", "2"],
            vec!["wordsnake", "--seed=4294967296"], // one past u32::MAX
        ] {
            assert!(seed_from_args(&args(&bad)).is_err(), "should reject {bad:?}");
        }
    }

    #[test]
    fn pinned_seed_wins_over_entropy() {
        let seed = session_seed(&args(&["wordsnake", "--seed=12345"]));
        assert_eq!(seed, Ok(12345));
    }

    #[test]
    fn unpinned_seeds_vary_across_calls() {
        let mut seeds: Vec<u32> = (0..8).map(|_| random_seed()).collect();
        seeds.sort_unstable();
        seeds.dedup();
        assert!(seeds.len() > 1, "salted entropy should not collapse to one value");
    }
}
