//! Install simulation
//!
//! Turns a list of enable/disable requests into the complete, ordered list
//! of actions that leaves a tenant consistent. Nothing is applied: the
//! resolver only works on copies of the enabled set.
//!
//! Resolution runs in two phases. Requests are applied first, in the order
//! given. The working set is then repaired until every required interface
//! has a compatible provider, pulling in providers, upgrading stale ones or
//! swapping dependents for a version that fits. Whatever cannot be
//! reconciled is reported by a final consistency check.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::core::action::{Action, TenantModule};
use crate::core::module::{Interface, Module, ModuleId, ModuleMap};
use crate::core::products::{disambiguate_by_replaces, resolve_providers};
use crate::core::validate::{check_interface, dependency_report, DependencyReport, Problem, Scope};
use crate::error::ResolveError;

/// Simulate `requests` and replace them with the resulting plan
///
/// On error `requests` is left untouched.
pub fn install_simulate(
    catalog: &ModuleMap,
    enabled: &ModuleMap,
    requests: &mut Vec<TenantModule>,
) -> Result<(), ResolveError> {
    let plan = simulate(catalog, enabled, requests)?;
    *requests = plan;
    Ok(())
}

/// Compute the ordered plan for `requests`
///
/// `catalog` holds every known module, `enabled` the modules currently
/// enabled for the tenant. Enables come after the enables of their
/// providers; disables come after the disables of their dependents.
pub fn simulate(
    catalog: &ModuleMap,
    enabled: &ModuleMap,
    requests: &[TenantModule],
) -> Result<Vec<TenantModule>, ResolveError> {
    let mut session = Session::new(catalog, enabled);
    for request in requests {
        session.apply(request)?;
    }
    session.repair()?;
    if session.trials > 0 {
        tracing::debug!("Ran {} substitution trial(s)", session.trials);
    }

    let report = session.consistency();
    if !report.is_empty() {
        tracing::debug!("Simulation left {} problem(s)", report.problems().len());
        return Err(ResolveError::Unsatisfied(report));
    }

    let plan = session.plan();
    tracing::info!(
        "Resolved {} request(s) into {} action(s)",
        requests.len(),
        plan.len()
    );
    Ok(plan)
}

/// A journal record, in the order products were first changed
#[derive(Debug, Clone)]
enum Entry {
    /// A product whose enabled version changed; diffed at the end
    Product(String),
    /// Reported as-is
    Verbatim(TenantModule),
}

/// An interface of a working module without a compatible provider
#[derive(Debug)]
enum Gap {
    /// Nothing in the working set provides the interface name
    Missing { module: Module, interface: Interface },
    /// Providers by name are enabled, but at incompatible versions
    Stale {
        module: Module,
        interface: Interface,
        providers: Vec<Module>,
    },
}

#[derive(Debug, Clone)]
struct Session<'a> {
    catalog: &'a ModuleMap,
    original: &'a ModuleMap,
    working: ModuleMap,
    journal: Vec<Entry>,
    touched: BTreeSet<String>,
    reported: BTreeSet<String>,
    /// Products named by enable requests
    requested: BTreeSet<String>,
    /// Products chosen while repairing
    repaired: BTreeSet<String>,
    /// Products disabled in this simulation
    dropped: BTreeSet<String>,
    /// `(module, interface)` pairs left for the final check
    deferred: BTreeSet<(String, String)>,
    /// Failed substitutions, by candidate and the providers it would use
    rejected: HashSet<(String, Vec<String>)>,
    /// Substitution trials run so far, nested ones included
    trials: usize,
}

impl<'a> Session<'a> {
    fn new(catalog: &'a ModuleMap, original: &'a ModuleMap) -> Self {
        Self {
            catalog,
            original,
            working: original.clone(),
            journal: Vec::new(),
            touched: BTreeSet::new(),
            reported: BTreeSet::new(),
            requested: BTreeSet::new(),
            repaired: BTreeSet::new(),
            dropped: BTreeSet::new(),
            deferred: BTreeSet::new(),
            rejected: HashSet::new(),
            trials: 0,
        }
    }

    fn apply(&mut self, request: &TenantModule) -> Result<(), ResolveError> {
        match request.action {
            Action::Enable => self.enable_request(&request.id),
            Action::Disable => self.disable_request(&request.id),
            Action::Uptodate | Action::Conflict => {
                tracing::debug!("Passing through {request}");
                self.journal.push(Entry::Verbatim(request.clone()));
                Ok(())
            }
        }
    }

    fn enable_request(&mut self, id: &str) -> Result<(), ResolveError> {
        let module = self
            .find_in_catalog(id)
            .ok_or_else(|| ResolveError::ModuleNotFound { id: id.to_string() })?;
        let product = module.product().to_string();
        self.requested.insert(product.clone());

        if self.working.contains_key(module.id()) {
            let unchanged =
                self.original.contains_key(module.id()) && !self.touched.contains(&product);
            if unchanged && self.reported.insert(module.id().to_string()) {
                tracing::debug!("Module {} is up to date", module.id());
                self.journal
                    .push(Entry::Verbatim(TenantModule::uptodate(module.id())));
            }
            return Ok(());
        }

        tracing::info!("Enabling {}", module.id());
        self.install(module.clone());
        Ok(())
    }

    fn disable_request(&mut self, id: &str) -> Result<(), ResolveError> {
        if let Some(target) = self.find_enabled(id) {
            tracing::info!("Disabling {target}");
            self.disable(&target, &mut Vec::new());
            return Ok(());
        }

        // Already taken down by an earlier cascade
        let parsed = ModuleId::parse(id).ok();
        let cascaded = parsed.as_ref().is_some_and(|p| {
            self.dropped.contains(p.product())
                && (p.is_product() || self.original.contains_key(id))
        });
        if cascaded {
            tracing::debug!("Skipping disable of {id}: already disabled");
            return Ok(());
        }
        Err(ResolveError::ModuleNotFound { id: id.to_string() })
    }

    /// Exact id, or the highest version of a bare product
    fn find_in_catalog(&self, id: &str) -> Option<&'a Module> {
        let catalog: &'a ModuleMap = self.catalog;
        if let Some(module) = catalog.get(id) {
            return Some(module);
        }
        let parsed = ModuleId::parse(id).ok()?;
        if !parsed.is_product() {
            return None;
        }
        catalog
            .values()
            .filter(|m| m.product() == id)
            .max_by(|a, b| a.version().cmp(b.version()))
    }

    fn find_enabled(&self, id: &str) -> Option<String> {
        if self.working.contains_key(id) {
            return Some(id.to_string());
        }
        let parsed = ModuleId::parse(id).ok()?;
        if !parsed.is_product() {
            return None;
        }
        self.working
            .values()
            .find(|m| m.product() == id)
            .map(|m| m.id().to_string())
    }

    fn touch(&mut self, product: &str) {
        if self.touched.insert(product.to_string()) {
            self.journal.push(Entry::Product(product.to_string()));
        }
    }

    fn is_settled(&self, product: &str) -> bool {
        self.requested.contains(product) || self.repaired.contains(product)
    }

    /// Whether repair may bring `candidate` in
    fn eligible(&self, candidate: &Module) -> bool {
        if self.dropped.contains(candidate.product()) {
            return false;
        }
        let other_version = self
            .working
            .values()
            .any(|m| m.product() == candidate.product() && m.id() != candidate.id());
        !(other_version && self.is_settled(candidate.product()))
    }

    /// Put `module` into the working set
    ///
    /// Replaces other versions of its product and takes over interfaces
    /// from unsettled products providing the same names.
    fn install(&mut self, module: Module) {
        let product = module.product().to_string();
        self.working.retain(|_, m| m.product() != product);

        let taken_over: Vec<String> = self
            .working
            .values()
            .filter(|m| !self.is_settled(m.product()))
            .filter(|m| m.provides().iter().any(|p| module.provides_name(p.name())))
            .map(|m| m.id().to_string())
            .collect();
        // Consumers of the taken-over names stay and are repaired against
        // the new provider; consumers of anything else go with the module
        let kept: Vec<&str> = module.provides().iter().map(Interface::name).collect();
        for id in taken_over {
            tracing::info!("Disabling {id}: interfaces taken over by {}", module.id());
            self.disable_except(&id, &kept, &mut Vec::new());
        }

        self.dropped.remove(&product);
        self.touch(&product);
        self.working.insert(module.id().to_string(), module);
    }

    /// Remove `id` and every module left without a provider by its removal
    fn disable(&mut self, id: &str, visiting: &mut Vec<String>) {
        self.disable_except(id, &[], visiting);
    }

    /// Like `disable`, but dependents losing only interfaces named in
    /// `kept` are left in place
    ///
    /// A non-empty `kept` marks a takeover: settled dependents are never
    /// cascaded, so repair reports what they lose.
    fn disable_except(&mut self, id: &str, kept: &[&str], visiting: &mut Vec<String>) {
        let Some(target) = self.working.get(id).cloned() else {
            return;
        };
        visiting.push(id.to_string());

        let dependents: Vec<String> = self
            .working
            .values()
            .filter(|m| m.id() != id && !visiting.iter().any(|v| v == m.id()))
            .filter(|m| kept.is_empty() || !self.is_settled(m.product()))
            .filter(|m| {
                m.requires().iter().any(|required| {
                    !kept.contains(&required.name())
                        && target.provided_match(required).is_some()
                        && !self
                            .working
                            .values()
                            .any(|other| other.id() != id && other.provided_match(required).is_some())
                })
            })
            .map(|m| m.id().to_string())
            .collect();
        for dependent in dependents {
            tracing::info!("Disabling {dependent}: depends on {id}");
            self.disable(&dependent, visiting);
        }

        visiting.pop();
        self.working.remove(id);
        self.dropped.insert(target.product().to_string());
        self.touch(target.product());
    }

    /// Close gaps until none is left, or one cannot be closed
    fn repair(&mut self) -> Result<(), ResolveError> {
        while let Some(gap) = self.next_gap() {
            match gap {
                Gap::Missing { module, interface } => self.pull_in(&module, &interface)?,
                Gap::Stale {
                    module,
                    interface,
                    providers,
                } => self.reconcile(&module, &interface, &providers)?,
            }
        }
        Ok(())
    }

    /// First gap in ascending module id order, required before optional
    fn next_gap(&self) -> Option<Gap> {
        for module in self.working.values() {
            for (interface, required) in module.dependencies() {
                let key = (module.id().to_string(), interface.name().to_string());
                if self.deferred.contains(&key) {
                    continue;
                }
                if self
                    .working
                    .values()
                    .any(|p| p.provided_match(interface).is_some())
                {
                    continue;
                }

                let providers: Vec<Module> = self
                    .working
                    .values()
                    .filter(|p| p.provides_name(interface.name()))
                    .cloned()
                    .collect();
                if !providers.is_empty() {
                    return Some(Gap::Stale {
                        module: module.clone(),
                        interface: interface.clone(),
                        providers,
                    });
                }
                if required {
                    return Some(Gap::Missing {
                        module: module.clone(),
                        interface: interface.clone(),
                    });
                }
            }
        }
        None
    }

    /// Enable a provider for a required interface nobody provides
    fn pull_in(&mut self, module: &Module, interface: &Interface) -> Result<(), ResolveError> {
        let catalog: &'a ModuleMap = self.catalog;
        let candidates: Vec<&Module> = resolve_providers(interface, catalog.values())
            .into_iter()
            .filter(|c| self.eligible(c))
            .collect();

        if candidates.is_empty() {
            let pool: Vec<&Module> = catalog.values().collect();
            return Err(match check_interface(module, interface, &pool) {
                Some(problem @ Problem::Incompatible { .. }) => {
                    ResolveError::Unsatisfied(DependencyReport::from(problem))
                }
                _ => ResolveError::InterfaceNotFound {
                    module: module.id().to_string(),
                    interface: interface.name().to_string(),
                },
            });
        }

        let chosen = disambiguate_by_replaces(module.id(), interface, &candidates)?.clone();
        tracing::info!(
            "Enabling {} to provide {interface} for {}",
            chosen.id(),
            module.id()
        );
        self.repaired.insert(chosen.product().to_string());
        self.install(chosen);
        Ok(())
    }

    /// Handle a dependency on an interface enabled at the wrong version
    fn reconcile(
        &mut self,
        module: &Module,
        interface: &Interface,
        providers: &[Module],
    ) -> Result<(), ResolveError> {
        let product = module.product();
        let provider_requested = providers
            .iter()
            .any(|p| self.requested.contains(p.product()));
        let may_substitute = !self.repaired.contains(product)
            && (!self.requested.contains(product) || provider_requested);
        if may_substitute && self.substitute(module, interface) {
            return Ok(());
        }

        if !providers.iter().any(|p| self.is_settled(p.product())) {
            return self.upgrade_provider(module, interface);
        }

        tracing::debug!(
            "Deferring {interface} of {}: no version fits the enabled providers",
            module.id()
        );
        self.deferred
            .insert((module.id().to_string(), interface.name().to_string()));
        Ok(())
    }

    /// Swap `module` for another version of its product that fits
    ///
    /// Candidates are tried highest version first, each on a copy of the
    /// session; the first that repairs cleanly is kept.
    fn substitute(&mut self, module: &Module, interface: &Interface) -> bool {
        let catalog: &'a ModuleMap = self.catalog;
        let mut candidates: Vec<&Module> = catalog
            .values()
            .filter(|c| c.product() == module.product() && c.id() != module.id())
            .filter(|c| self.fits(c, interface))
            .collect();
        candidates.sort_by(|a, b| b.version().cmp(a.version()));

        for candidate in candidates {
            let key = self.trial_key(candidate);
            if self.rejected.contains(&key) {
                tracing::debug!("Skipping {}: already rejected", candidate.id());
                continue;
            }

            self.trials += 1;
            let mut trial = self.clone();
            trial.repaired.insert(candidate.product().to_string());
            trial.install(candidate.clone());

            let outcome = trial.repair();
            match outcome {
                Ok(()) if trial.consistency().is_empty() => {
                    tracing::info!(
                        "Replacing {} with {} to match interface {}",
                        module.id(),
                        candidate.id(),
                        interface.name()
                    );
                    *self = trial;
                    return true;
                }
                Ok(()) => tracing::debug!("Rejected {}: dependencies left unsatisfied", candidate.id()),
                Err(e) => tracing::debug!("Rejected {}: {e}", candidate.id()),
            }
            self.rejected = trial.rejected;
            self.trials = trial.trials;
            self.rejected.insert(key);
        }
        false
    }

    /// What a substitution trial of `candidate` depends on
    ///
    /// The candidate id plus the enabled providers, of other products, of
    /// every interface name it uses.
    fn trial_key(&self, candidate: &Module) -> (String, Vec<String>) {
        let providers = self
            .working
            .values()
            .filter(|p| p.product() != candidate.product())
            .filter(|p| candidate.dependencies().any(|(i, _)| p.provides_name(i.name())))
            .map(|p| p.id().to_string())
            .collect();
        (candidate.id().to_string(), providers)
    }

    /// Whether `candidate`'s use of the interface name matches what is enabled
    fn fits(&self, candidate: &Module, interface: &Interface) -> bool {
        candidate
            .dependencies()
            .filter(|(declared, _)| declared.name() == interface.name())
            .all(|(declared, _)| {
                self.working
                    .values()
                    .any(|p| p.provided_match(declared).is_some())
            })
    }

    /// Replace a stale provider with one compatible with `module`
    fn upgrade_provider(
        &mut self,
        module: &Module,
        interface: &Interface,
    ) -> Result<(), ResolveError> {
        let catalog: &'a ModuleMap = self.catalog;
        let candidates: Vec<&Module> = resolve_providers(interface, catalog.values())
            .into_iter()
            .filter(|c| self.eligible(c))
            .collect();
        if candidates.is_empty() {
            return Err(ResolveError::InterfaceNotFound {
                module: module.id().to_string(),
                interface: interface.name().to_string(),
            });
        }

        let chosen = disambiguate_by_replaces(module.id(), interface, &candidates)?.clone();
        tracing::info!(
            "Upgrading provider of {} to {} for {}",
            interface.name(),
            chosen.id(),
            module.id()
        );
        self.repaired.insert(chosen.product().to_string());
        self.install(chosen);
        Ok(())
    }

    fn consistency(&self) -> DependencyReport {
        let pool: Vec<&Module> = self.working.values().collect();
        dependency_report(&pool, &pool, Scope::WithOptional)
    }

    /// Diff the working set against the original and order the result
    fn plan(&self) -> Vec<TenantModule> {
        let mut steps: Vec<Step> = Vec::new();

        for entry in &self.journal {
            match entry {
                Entry::Verbatim(action) => steps.push(Step {
                    action: action.clone(),
                    module: None,
                }),
                Entry::Product(product) => self.diff_product(product, &mut steps),
            }
        }

        let mut graph = DependencyGraph::new();
        for (index, step) in steps.iter().enumerate() {
            let dependencies = steps
                .iter()
                .enumerate()
                .filter(|&(other, _)| other != index)
                .filter(|(_, other)| step.must_follow(other))
                .map(|(other, _)| other)
                .collect();
            graph.add_step(index, dependencies);
        }

        let mut slots: Vec<Option<Step>> = steps.into_iter().map(Some).collect();
        graph
            .order()
            .into_iter()
            .filter_map(|index| slots.get_mut(index).and_then(Option::take))
            .map(|step| step.action)
            .collect()
    }

    fn diff_product(&self, product: &str, steps: &mut Vec<Step>) {
        let before: Vec<&Module> = self
            .original
            .values()
            .filter(|m| m.product() == product)
            .collect();
        let after = self.working.values().find(|m| m.product() == product);

        let Some(now) = after else {
            steps.extend(before.into_iter().map(|old| Step {
                action: TenantModule::disable(old.id()),
                module: Some(old.clone()),
            }));
            return;
        };
        if before.iter().any(|old| old.id() == now.id()) {
            return;
        }

        let action = match before.first() {
            Some(old) => TenantModule::upgrade(now.id(), old.id()),
            None => TenantModule::enable(now.id()),
        };
        steps.push(Step {
            action,
            module: Some(now.clone()),
        });
        steps.extend(before.into_iter().skip(1).map(|old| Step {
            action: TenantModule::disable(old.id()),
            module: Some(old.clone()),
        }));
    }
}

/// A plan entry, with the module it enables or disables
#[derive(Debug)]
struct Step {
    action: TenantModule,
    module: Option<Module>,
}

impl Step {
    fn must_follow(&self, other: &Step) -> bool {
        let (Some(this), Some(that)) = (&self.module, &other.module) else {
            return false;
        };
        if this.product() == that.product() {
            return false;
        }
        match (self.action.action, other.action.action) {
            // Providers first
            (Action::Enable, Action::Enable) => {
                this.dependencies().any(|(i, _)| that.provided_match(i).is_some())
            }
            // Make room for interfaces taken over
            (Action::Enable, Action::Disable) => that
                .provides()
                .iter()
                .any(|p| this.provides_name(p.name())),
            // Dependents first
            (Action::Disable, Action::Disable) => {
                that.dependencies().any(|(i, _)| this.provided_match(i).is_some())
            }
            _ => false,
        }
    }
}

/// Ordering graph over plan steps
///
/// Steps are visited in insertion order, so unrelated steps keep the order
/// they were recorded in. Cycles do not fail: the back edge is dropped.
#[derive(Debug, Default)]
struct DependencyGraph {
    /// Adjacency list: step -> steps that must come first
    edges: HashMap<usize, Vec<usize>>,
    nodes: Vec<usize>,
}

impl DependencyGraph {
    fn new() -> Self {
        Self::default()
    }

    fn add_step(&mut self, step: usize, dependencies: Vec<usize>) {
        self.nodes.push(step);
        self.edges.insert(step, dependencies);
    }

    /// Steps such that dependencies come before dependents
    fn order(&self) -> Vec<usize> {
        let mut visited = HashSet::new();
        let mut temp_visited = HashSet::new();
        let mut result = Vec::new();

        for &node in &self.nodes {
            self.visit(node, &mut visited, &mut temp_visited, &mut result);
        }
        result
    }

    fn visit(
        &self,
        node: usize,
        visited: &mut HashSet<usize>,
        temp_visited: &mut HashSet<usize>,
        result: &mut Vec<usize>,
    ) {
        if visited.contains(&node) {
            return;
        }
        if !temp_visited.insert(node) {
            tracing::debug!("Ordering cycle through plan step {node}");
            return;
        }

        if let Some(deps) = self.edges.get(&node) {
            for &dep in deps {
                self.visit(dep, visited, temp_visited, result);
            }
        }

        temp_visited.remove(&node);
        visited.insert(node);
        result.push(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::module::module_map;

    fn provider(id: &str, version: &str) -> Module {
        Module::builder(id).provides("int", version).build().unwrap()
    }

    fn consumer(id: &str, version: &str) -> Module {
        Module::builder(id).requires("int", version).build().unwrap()
    }

    #[test]
    fn test_graph_dependencies_first() {
        let mut graph = DependencyGraph::new();
        graph.add_step(0, vec![1]);
        graph.add_step(1, vec![]);
        graph.add_step(2, vec![]);

        assert_eq!(graph.order(), [1, 0, 2]);
    }

    #[test]
    fn test_graph_cycle_keeps_every_step() {
        let mut graph = DependencyGraph::new();
        graph.add_step(0, vec![1]);
        graph.add_step(1, vec![2]);
        graph.add_step(2, vec![0]);

        let order = graph.order();
        assert_eq!(order.len(), 3);
        assert_eq!(order, [2, 1, 0]);
    }

    #[test]
    fn test_enable_with_missing_provider_pulls_it_in() {
        let catalog = module_map([provider("moduleA-1.0.0", "1.0"), consumer("moduleE-1.0.0", "1.0")]);
        let plan = simulate(&catalog, &ModuleMap::new(), &[TenantModule::enable("moduleE-1.0.0")]).unwrap();

        assert_eq!(
            plan,
            [
                TenantModule::enable("moduleA-1.0.0"),
                TenantModule::enable("moduleE-1.0.0"),
            ]
        );
    }

    #[test]
    fn test_requests_untouched_on_error() {
        let catalog = module_map([provider("moduleA-1.0.0", "1.0")]);
        let mut requests = vec![TenantModule::enable("moduleB-1.0.0")];

        let err = install_simulate(&catalog, &ModuleMap::new(), &mut requests).unwrap_err();
        assert_eq!(err.to_string(), "Module moduleB-1.0.0 not found");
        assert_eq!(requests, [TenantModule::enable("moduleB-1.0.0")]);
    }

    #[test]
    fn test_repeated_enable_reports_uptodate_once() {
        let a = provider("moduleA-1.0.0", "1.0");
        let catalog = module_map([a.clone()]);
        let enabled = module_map([a]);
        let requests = [
            TenantModule::enable("moduleA-1.0.0"),
            TenantModule::enable("moduleA"),
        ];

        let plan = simulate(&catalog, &enabled, &requests).unwrap();
        assert_eq!(plan, [TenantModule::uptodate("moduleA-1.0.0")]);
    }

    /// Link `product` of a chain: provides `i{product}`, requires the previous link
    fn chain_link(product: usize, version: &str, interface: &str) -> Module {
        let mut builder =
            Module::builder(&format!("p{product}-{version}")).provides(&format!("i{product}"), interface);
        if product > 0 {
            builder = builder.requires(&format!("i{}", product - 1), interface);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_failed_substitutions_are_not_retried() {
        const DEPTH: usize = 10;
        const VERSIONS: usize = 4;

        // Every link but the last has newer versions; the last never fits
        let enabled = module_map((0..DEPTH).map(|p| chain_link(p, "1.0.0", "1.0")));
        let mut catalog = enabled.clone();
        let newest = chain_link(0, "2.0.0", "2.0");
        catalog.insert(newest.id().to_string(), newest);
        for p in 1..DEPTH - 1 {
            for v in 0..VERSIONS {
                let link = chain_link(p, &format!("2.{v}.0"), "2.0");
                catalog.insert(link.id().to_string(), link);
            }
        }

        let mut session = Session::new(&catalog, &enabled);
        session.apply(&TenantModule::enable("p0-2.0.0")).unwrap();
        session.repair().unwrap();

        assert!(!session.consistency().is_empty());
        assert!(
            session.trials <= VERSIONS * VERSIONS * DEPTH,
            "{} substitution trials",
            session.trials
        );

        let err = simulate(&catalog, &enabled, &[TenantModule::enable("p0-2.0.0")]).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Incompatible version for module p1-1.0.0 interface i0. Need 1.0. Have 2.0/p0-2.0.0"));
    }

    #[test]
    fn test_cyclic_dependencies_still_planned() {
        let x = Module::builder("moduleX-1.0.0")
            .provides("ix", "1.0")
            .requires("iy", "1.0")
            .build()
            .unwrap();
        let y = Module::builder("moduleY-1.0.0")
            .provides("iy", "1.0")
            .requires("ix", "1.0")
            .build()
            .unwrap();
        let catalog = module_map([x, y]);

        let plan = simulate(&catalog, &ModuleMap::new(), &[TenantModule::enable("moduleX-1.0.0")]).unwrap();
        assert_eq!(
            plan,
            [
                TenantModule::enable("moduleY-1.0.0"),
                TenantModule::enable("moduleX-1.0.0"),
            ]
        );
    }
}
