//! Extension points for the resolver chain and the shortlink generator.
//!
//! Every hook is a [`FilterChain`]: an ordered list of functions, each taking
//! the current value and returning a possibly modified one, applied in
//! registration order. With nothing registered a hook returns its input, so
//! the built-in behavior is always what an empty [`Hooks`] produces.
//!
//! [`Hooks`] is assembled once at startup and then shared read-only behind an
//! `Arc`; registration takes `self` by value so a registry cannot change once
//! it has been handed to the services.
//!
//! # Example
//!
//! ```
//! use hum::application::hooks::Hooks;
//! use hum::domain::entities::TypePrefix;
//!
//! let wiki = TypePrefix::new('w').unwrap();
//! let hooks = Hooks::new()
//!     .add_redirect_rule(wiki, "http://wiki.example.com/")
//!     .with_affiliate_id("xyz-20");
//!
//! assert_eq!(hooks.redirect_base(wiki).as_deref(), Some("http://wiki.example.com/"));
//! assert_eq!(hooks.affiliate_id().as_deref(), Some("xyz-20"));
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::domain::entities::{ItemPath, Resource, ResourceId, ShortPath, TypePrefix};

/// Ordered list of value filters sharing one argument type.
pub struct FilterChain<T, A: ?Sized = ()> {
    filters: Vec<Arc<dyn Fn(T, &A) -> T + Send + Sync>>,
}

impl<T, A: ?Sized> FilterChain<T, A> {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Appends a filter; it runs after every filter already registered.
    pub fn push<F>(&mut self, filter: F)
    where
        F: Fn(T, &A) -> T + Send + Sync + 'static,
    {
        self.filters.push(Arc::new(filter));
    }

    /// Folds `value` through every filter in registration order.
    pub fn apply(&self, value: T, args: &A) -> T {
        self.filters.iter().fold(value, |acc, filter| filter(acc, args))
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<T, A: ?Sized> Default for FilterChain<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: ?Sized> Clone for FilterChain<T, A> {
    fn clone(&self) -> Self {
        Self {
            filters: self.filters.clone(),
        }
    }
}

impl<T, A: ?Sized> fmt::Debug for FilterChain<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("filters", &self.filters.len())
            .finish()
    }
}

/// Filter chains selected by key, e.g. one chain per type prefix.
pub struct KeyedFilterChain<K, T, A: ?Sized = ()> {
    chains: HashMap<K, FilterChain<T, A>>,
}

impl<K: Eq + Hash, T, A: ?Sized> KeyedFilterChain<K, T, A> {
    pub fn new() -> Self {
        Self {
            chains: HashMap::new(),
        }
    }

    pub fn push<F>(&mut self, key: K, filter: F)
    where
        F: Fn(T, &A) -> T + Send + Sync + 'static,
    {
        self.chains.entry(key).or_default().push(filter);
    }

    /// Runs the chain registered under `key`; passes `value` through when there is none.
    pub fn apply<Q>(&self, key: &Q, value: T, args: &A) -> T
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        match self.chains.get(key) {
            Some(chain) => chain.apply(value, args),
            None => value,
        }
    }
}

impl<K: Eq + Hash, T, A: ?Sized> Default for KeyedFilterChain<K, T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, T, A: ?Sized> Clone for KeyedFilterChain<K, T, A> {
    fn clone(&self) -> Self {
        Self {
            chains: self.chains.clone(),
        }
    }
}

impl<K: fmt::Debug, T, A: ?Sized> fmt::Debug for KeyedFilterChain<K, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.chains.iter().map(|(k, chain)| (k, chain.len())))
            .finish()
    }
}

/// The registry of every extension point.
///
/// | Hook | Value | Default |
/// |---|---|---|
/// | `local_types` | prefixes served from local content | `b t a p` |
/// | `redirect_base_{type}` | base URL for a prefix | none |
/// | `redirect_{type}` | final destination for a prefix | unchanged |
/// | `redirect_i_{subtype}` | destination for an `/i/` subtype | unchanged |
/// | `affiliate_id` | Amazon affiliate tag | none |
/// | `type_prefix` | prefix computed for a resource | unchanged |
/// | `shortlink_base` | base URL for generated shortlinks | unchanged |
/// | `legacy_id` | resource ID read from a 404 path | unchanged |
/// | `legacy_redirect` | redirect target for a legacy ID | unchanged |
#[derive(Clone, Default, Debug)]
pub struct Hooks {
    local_types: FilterChain<Vec<TypePrefix>>,
    redirect_base: KeyedFilterChain<TypePrefix, Option<String>>,
    redirect: KeyedFilterChain<TypePrefix, Option<String>, ShortPath>,
    redirect_item: KeyedFilterChain<String, Option<String>, ItemPath>,
    affiliate_id: FilterChain<Option<String>>,
    type_prefix: FilterChain<TypePrefix, Resource>,
    shortlink_base: FilterChain<String>,
    legacy_id: FilterChain<Option<ResourceId>, str>,
    legacy_redirect: FilterChain<String, Resource>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    // Registration

    pub fn on_local_types<F>(mut self, filter: F) -> Self
    where
        F: Fn(Vec<TypePrefix>) -> Vec<TypePrefix> + Send + Sync + 'static,
    {
        self.local_types.push(move |types, _: &()| filter(types));
        self
    }

    /// Serves `prefix` from local content as well.
    pub fn add_local_type(self, prefix: TypePrefix) -> Self {
        self.on_local_types(move |mut types| {
            if !types.contains(&prefix) {
                types.push(prefix);
            }
            types
        })
    }

    pub fn on_redirect_base<F>(mut self, prefix: TypePrefix, filter: F) -> Self
    where
        F: Fn(Option<String>) -> Option<String> + Send + Sync + 'static,
    {
        self.redirect_base.push(prefix, move |base, _: &()| filter(base));
        self
    }

    /// Registers a simple redirect rule: `/{prefix}/{id}` goes to `base_url/{id}`.
    pub fn add_redirect_rule(self, prefix: TypePrefix, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.on_redirect_base(prefix, move |_| Some(base_url.clone()))
    }

    pub fn on_redirect<F>(mut self, prefix: TypePrefix, filter: F) -> Self
    where
        F: Fn(Option<String>, &ShortPath) -> Option<String> + Send + Sync + 'static,
    {
        self.redirect.push(prefix, filter);
        self
    }

    pub fn on_redirect_item<F>(mut self, subtype: impl Into<String>, filter: F) -> Self
    where
        F: Fn(Option<String>, &ItemPath) -> Option<String> + Send + Sync + 'static,
    {
        self.redirect_item.push(subtype.into(), filter);
        self
    }

    pub fn on_affiliate_id<F>(mut self, filter: F) -> Self
    where
        F: Fn(Option<String>) -> Option<String> + Send + Sync + 'static,
    {
        self.affiliate_id.push(move |id, _: &()| filter(id));
        self
    }

    pub fn with_affiliate_id(self, affiliate_id: impl Into<String>) -> Self {
        let affiliate_id = affiliate_id.into();
        self.on_affiliate_id(move |_| Some(affiliate_id.clone()))
    }

    pub fn on_type_prefix<F>(mut self, filter: F) -> Self
    where
        F: Fn(TypePrefix, &Resource) -> TypePrefix + Send + Sync + 'static,
    {
        self.type_prefix.push(filter);
        self
    }

    pub fn on_shortlink_base<F>(mut self, filter: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.shortlink_base.push(move |base, _: &()| filter(base));
        self
    }

    pub fn on_legacy_id<F>(mut self, filter: F) -> Self
    where
        F: Fn(Option<ResourceId>, &str) -> Option<ResourceId> + Send + Sync + 'static,
    {
        self.legacy_id.push(filter);
        self
    }

    pub fn on_legacy_redirect<F>(mut self, filter: F) -> Self
    where
        F: Fn(String, &Resource) -> String + Send + Sync + 'static,
    {
        self.legacy_redirect.push(filter);
        self
    }

    // Application

    /// Prefixes resolved against the local resource store.
    pub fn local_types(&self) -> Vec<TypePrefix> {
        self.local_types.apply(TypePrefix::LOCAL_DEFAULTS.to_vec(), &())
    }

    pub fn is_local(&self, prefix: TypePrefix) -> bool {
        self.local_types().contains(&prefix)
    }

    /// Base URL of the redirect rule for `prefix`, if one is registered and non-empty.
    pub fn redirect_base(&self, prefix: TypePrefix) -> Option<String> {
        self.redirect_base
            .apply(&prefix, None, &())
            .filter(|base| !base.is_empty())
    }

    pub fn redirect(&self, path: &ShortPath, destination: Option<String>) -> Option<String> {
        self.redirect.apply(&path.prefix, destination, path)
    }

    pub fn redirect_item(&self, item: &ItemPath, destination: Option<String>) -> Option<String> {
        self.redirect_item.apply(item.subtype.as_str(), destination, item)
    }

    /// Configured affiliate ID; an empty value counts as none.
    pub fn affiliate_id(&self) -> Option<String> {
        self.affiliate_id
            .apply(None, &())
            .filter(|id| !id.is_empty())
    }

    pub fn type_prefix(&self, prefix: TypePrefix, resource: &Resource) -> TypePrefix {
        self.type_prefix.apply(prefix, resource)
    }

    pub fn shortlink_base(&self, base: String) -> String {
        self.shortlink_base.apply(base, &())
    }

    pub fn legacy_id(&self, id: Option<ResourceId>, path: &str) -> Option<ResourceId> {
        self.legacy_id.apply(id, path)
    }

    pub fn legacy_redirect(&self, url: String, resource: &Resource) -> String {
        self.legacy_redirect.apply(url, resource)
    }
}
