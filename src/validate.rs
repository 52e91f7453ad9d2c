//! Constraint validation
//!
//! Checks that a requested length, repeat policy, and class-requirement
//! policy are jointly satisfiable against a given pool before any random
//! draw happens.

use crate::error::ValidationError;
use crate::pool::{class_membership, CharacterClass, CharacterPool};

/// Validate generation constraints against a built pool.
///
/// The no-repeat/require-classes interaction is deliberately not
/// pre-validated here: seeded picks that starve the fill set are detected
/// at generation time instead.
///
/// # Errors
/// * `ValidationError::InvalidLength` if `length` is below 1
/// * `ValidationError::PoolTooSmall` if no-repeat cannot supply `length`
///   distinct characters
/// * `ValidationError::UnsatisfiableClass` if a required class has no
///   characters left in the pool
/// * `ValidationError::LengthBelowClassCount` if `length` cannot fit one
///   mandatory character per active class
pub fn validate(
    length: usize,
    active_classes: &[CharacterClass],
    require_classes: bool,
    no_repeat: bool,
    pool: &CharacterPool,
) -> Result<(), ValidationError> {
    if length < 1 {
        return Err(ValidationError::InvalidLength);
    }

    if no_repeat && length > pool.len() {
        return Err(ValidationError::PoolTooSmall {
            length,
            pool_size: pool.len(),
        });
    }

    if require_classes && !active_classes.contains(&CharacterClass::UrlSafe) {
        let membership = class_membership(pool);
        let missing: Vec<String> = active_classes
            .iter()
            .filter(|class| {
                membership
                    .iter()
                    .any(|(c, members)| c == *class && members.is_empty())
            })
            .map(|class| class.name().to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::UnsatisfiableClass(missing));
        }

        if length < active_classes.len() {
            return Err(ValidationError::LengthBelowClassCount {
                length,
                classes: active_classes.len(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{build_pool, PoolSelection};

    fn digits_pool(exclude: &str) -> (CharacterPool, Vec<CharacterClass>) {
        build_pool(&PoolSelection {
            digits: true,
            exclude: exclude.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_invalid_length() {
        let (pool, classes) = digits_pool("");
        assert_eq!(
            validate(0, &classes, false, false, &pool),
            Err(ValidationError::InvalidLength)
        );
    }

    #[test]
    fn test_pool_too_small_for_no_repeat() {
        // 10 digits minus 5 exclusions leaves a 5-char pool
        let (pool, classes) = digits_pool("01234");
        assert_eq!(pool.len(), 5);
        assert_eq!(
            validate(6, &classes, false, true, &pool),
            Err(ValidationError::PoolTooSmall {
                length: 6,
                pool_size: 5,
            })
        );
        assert!(validate(5, &classes, false, true, &pool).is_ok());
    }

    #[test]
    fn test_length_below_class_count() {
        let (pool, classes) = build_pool(&PoolSelection {
            lower: true,
            upper: true,
            digits: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            validate(2, &classes, true, false, &pool),
            Err(ValidationError::LengthBelowClassCount {
                length: 2,
                classes: 3,
            })
        );
        assert!(validate(3, &classes, true, false, &pool).is_ok());
    }

    #[test]
    fn test_unsatisfiable_class_after_filters() {
        let (pool, classes) = build_pool(&PoolSelection {
            lower: true,
            digits: true,
            exclude: "0123456789".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            validate(8, &classes, true, false, &pool),
            Err(ValidationError::UnsatisfiableClass(vec![
                "digits".to_string()
            ]))
        );
        // Without the class requirement the same pool is fine
        assert!(validate(8, &classes, false, false, &pool).is_ok());
    }

    #[test]
    fn test_url_safe_skips_class_checks() {
        let (pool, classes) = build_pool(&PoolSelection {
            url_safe: true,
            ..Default::default()
        })
        .unwrap();
        // require_classes has no effect on the url_safe sentinel
        assert!(validate(1, &classes, true, false, &pool).is_ok());
    }
}
