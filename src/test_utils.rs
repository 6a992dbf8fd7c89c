//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a valid product name (never followed by `-digit`)
    pub fn product_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,8}(-[a-z][a-z0-9]{0,5}){0,2}"
    }

    /// Generate a `major.minor` interface version string
    pub fn interface_version() -> impl Strategy<Value = String> {
        (0u32..5, 0u32..5).prop_map(|(major, minor)| format!("{major}.{minor}"))
    }

    /// Generate a valid semver module version string
    pub fn module_version() -> impl Strategy<Value = String> {
        (1u32..20, 0u32..20, 0u32..20)
            .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    use crate::config::defaults::MIN_PROPTEST_ITERATIONS;
    use crate::core::module::ModuleId;
    use crate::core::version::parse_version;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(MIN_PROPTEST_ITERATIONS))]

        #[test]
        fn test_module_id_generator(product in product_name(), version in module_version()) {
            let id = ModuleId::parse(&format!("{product}-{version}")).unwrap();
            prop_assert_eq!(id.product(), product.as_str());
            prop_assert_eq!(id.version().unwrap().to_string(), version);
        }

        #[test]
        fn test_product_generator_is_bare(product in product_name()) {
            prop_assert!(ModuleId::parse(&product).unwrap().is_product());
        }

        #[test]
        fn test_interface_version_generator(version in interface_version()) {
            prop_assert!(parse_version(&version).is_ok());
        }
    }
}
