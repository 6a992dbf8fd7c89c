//! Product selection
//!
//! Maps interfaces to the modules that provide them, trims catalogs to the
//! latest releases per product and breaks provider ties with `replaces`.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::module::{compatible, Interface, Module};
use crate::error::ResolveError;

/// Keep the `n` highest versions of every product
///
/// The result is ordered by product descending, then version descending.
/// Catalog listings rely on this order.
pub fn latest_per_product(modules: &[Module], n: usize) -> Vec<Module> {
    let mut by_product: BTreeMap<&str, Vec<&Module>> = BTreeMap::new();
    for module in modules {
        by_product.entry(module.product()).or_default().push(module);
    }

    by_product
        .into_iter()
        .rev()
        .flat_map(|(_, mut versions)| {
            versions.sort_by(|a, b| b.version().cmp(a.version()).then_with(|| a.id().cmp(b.id())));
            versions.dedup_by(|a, b| a.id() == b.id());
            versions.into_iter().take(n)
        })
        .cloned()
        .collect()
}

/// Every module in `pool` providing an interface compatible with `required`
pub fn resolve_providers<'a, I>(required: &Interface, pool: I) -> Vec<&'a Module>
where
    I: IntoIterator<Item = &'a Module>,
{
    pool.into_iter()
        .filter(|m| m.provides().iter().any(|p| compatible(required, p)))
        .collect()
}

/// Every module in `pool` providing an interface named like `required`, any version
pub fn providers_by_name<'a, I>(required: &Interface, pool: I) -> Vec<&'a Module>
where
    I: IntoIterator<Item = &'a Module>,
{
    pool.into_iter()
        .filter(|m| m.provides_name(required.name()))
        .collect()
}

/// Pick a single provider out of `candidates`
///
/// Products replaced by another candidate's product are dropped until the set
/// stops shrinking. When one product remains its highest version is returned.
/// `module` is the requiring module, named in the error.
pub fn disambiguate_by_replaces<'a>(
    module: &str,
    required: &Interface,
    candidates: &[&'a Module],
) -> Result<&'a Module, ResolveError> {
    let mut products: BTreeSet<&str> = candidates.iter().map(|m| m.product()).collect();

    loop {
        let replaced: BTreeSet<&str> = candidates
            .iter()
            .filter(|m| products.contains(m.product()))
            .flat_map(|m| {
                m.replaces()
                    .iter()
                    .map(String::as_str)
                    .filter(move |p| *p != m.product())
            })
            .filter(|p| products.contains(p))
            .collect();

        // A replacement cycle would empty the set; leave it ambiguous instead.
        if replaced.is_empty() || replaced.len() == products.len() {
            break;
        }
        for product in &replaced {
            products.remove(product);
        }
        tracing::debug!(
            "Interface {} candidates narrowed by replaces to {:?}",
            required.name(),
            products
        );
    }

    if products.len() > 1 {
        return Err(ResolveError::AmbiguousInterface {
            module: module.to_string(),
            interface: required.name().to_string(),
            products: products.into_iter().map(str::to_string).collect(),
        });
    }

    candidates
        .iter()
        .copied()
        .filter(|m| products.contains(m.product()))
        .max_by(|a, b| a.version().cmp(b.version()).then_with(|| b.id().cmp(a.id())))
        .ok_or_else(|| ResolveError::InterfaceNotFound {
            module: module.to_string(),
            interface: required.name().to_string(),
        })
}
