//! Password generation
//!
//! Builds each password in four steps: seed one character per required
//! class, fill the remainder (with or without repetition), shuffle the
//! whole buffer, then wrap it in the decorative prefix/suffix. Every draw
//! comes from the thread-local CSPRNG via bias-free `random_range`.

use rand::Rng;

use crate::error::GenerationError;
use crate::pool::{class_membership, CharacterClass, CharacterPool};
use crate::{DEFAULT_COUNT, DEFAULT_LENGTH};

/// Options for a generation request
///
/// `length` covers the random portion only; `prefix` and `suffix` are
/// copied verbatim and never drawn from the pool.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Length of the random portion
    pub length: usize,
    /// How many passwords to produce
    pub count: usize,
    /// Require at least one character from each active class
    pub require_classes: bool,
    /// Forbid repeated characters in the random portion
    pub no_repeat: bool,
    /// Prepended verbatim, not counted toward `length`
    pub prefix: String,
    /// Appended verbatim, not counted toward `length`
    pub suffix: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            count: DEFAULT_COUNT,
            require_classes: false,
            no_repeat: false,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

/// Generate `config.count` independent passwords from a built pool.
///
/// Inputs are expected to have passed [`validate`](crate::validate::validate)
/// first; the one condition that validation leaves to runtime is a no-repeat
/// fill running out of unused characters.
///
/// # Errors
/// * `GenerationError::InsufficientUniqueChars` if the no-repeat fill cannot
///   find enough remaining unique characters
///
/// # Example
/// ```
/// use spgcore::{build_pool, generate, GenerationConfig, PoolSelection};
///
/// let (pool, classes) = build_pool(&PoolSelection::default()).unwrap();
/// let config = GenerationConfig {
///     length: 12,
///     count: 3,
///     ..Default::default()
/// };
/// let passwords = generate(&pool, &classes, &config).unwrap();
/// assert_eq!(passwords.len(), 3);
/// assert!(passwords.iter().all(|p| p.chars().count() == 12));
/// ```
pub fn generate(
    pool: &CharacterPool,
    active_classes: &[CharacterClass],
    config: &GenerationConfig,
) -> Result<Vec<String>, GenerationError> {
    let mut rng = rand::rng();
    let membership = class_membership(pool);
    let url_safe = active_classes.contains(&CharacterClass::UrlSafe);

    let mut passwords = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let mut chars: Vec<char> = Vec::with_capacity(config.length);

        if config.require_classes && !url_safe {
            pick_from_each_class(&mut rng, active_classes, &membership, &mut chars);
        }

        let remainder = config.length.saturating_sub(chars.len());

        if config.no_repeat {
            let mut available: Vec<char> = pool
                .chars()
                .iter()
                .copied()
                .filter(|c| !chars.contains(c))
                .collect();
            secure_shuffle(&mut rng, &mut available);
            if available.len() < remainder {
                return Err(GenerationError::InsufficientUniqueChars);
            }
            chars.extend(available.into_iter().take(remainder));
        } else {
            for _ in 0..remainder {
                let idx = rng.random_range(0..pool.len());
                chars.push(pool.chars()[idx]);
            }
        }

        // Shuffle so the seeded class characters are not predictably placed
        secure_shuffle(&mut rng, &mut chars);

        let mut password =
            String::with_capacity(config.prefix.len() + chars.len() + config.suffix.len());
        password.push_str(&config.prefix);
        password.extend(chars.iter());
        password.push_str(&config.suffix);
        passwords.push(password);
    }

    Ok(passwords)
}

/// Draw one uniform character from each active class's pool slice.
///
/// The url_safe sentinel never seeds. Empty slices are skipped; validation
/// rejects them before generation on the require-classes path.
fn pick_from_each_class<R: Rng>(
    rng: &mut R,
    active_classes: &[CharacterClass],
    membership: &[(CharacterClass, Vec<char>)],
    out: &mut Vec<char>,
) {
    for class in active_classes {
        if *class == CharacterClass::UrlSafe {
            continue;
        }
        if let Some((_, members)) = membership.iter().find(|(c, _)| c == class) {
            if !members.is_empty() {
                let idx = rng.random_range(0..members.len());
                out.push(members[idx]);
            }
        }
    }
}

/// Unbiased Fisher-Yates shuffle: position i swaps with a uniform j in
/// [0, i], for i from the end down to 1.
fn secure_shuffle<R: Rng>(rng: &mut R, chars: &mut [char]) {
    for i in (1..chars.len()).rev() {
        let j = rng.random_range(0..=i);
        chars.swap(i, j);
    }
}
