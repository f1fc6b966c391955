//! Route patterns, the registry, and path resolution.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Redirect hops followed before giving up on a path.
const MAX_REDIRECTS: usize = 8;

/// Screens the storefront and admin console can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    /// Storefront landing page with the product grid and cart.
    UserHome,
    /// Cart review and order submission.
    OrderConfirm,
    /// Single product with its specifications.
    ProductDetail,
    /// Admin dashboard with revenue charts.
    ManageHome,
    ManageProducts,
    ManageCategories,
    ManageOrders,
}

impl View {
    /// Whether the view belongs to the admin console.
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            View::ManageHome | View::ManageProducts | View::ManageCategories | View::ManageOrders
        )
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Static description of a route: its pattern and optional name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    pub path: &'static str,
    pub name: Option<&'static str>,
}

/// What a matched route leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Render a view.
    View(View),
    /// Continue resolution at another path.
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A registered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    meta: RouteMeta,
    segments: Vec<Segment>,
    target: RouteTarget,
}

impl RouteEntry {
    fn new(meta: RouteMeta, target: RouteTarget) -> Self {
        let segments = split(meta.path)
            .map(|part| match part.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Static(part.to_string()),
            })
            .collect();
        Self {
            meta,
            segments,
            target,
        }
    }

    /// Route metadata.
    pub fn meta(&self) -> RouteMeta {
        self.meta
    }

    /// Where the route leads.
    pub fn target(&self) -> &RouteTarget {
        &self.target
    }

    /// Match the given path segments, capturing `:param` values.
    fn capture(&self, parts: &[&str]) -> Option<BTreeMap<String, String>> {
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(text) if text == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), (*part).to_string());
                }
            }
        }
        Some(params)
    }
}

/// Result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    /// The view to render.
    pub view: View,
    /// Route name, when the route has one.
    pub name: Option<&'static str>,
    /// Final path after redirects, normalized.
    pub path: String,
    /// Captured `:param` values.
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    /// A captured parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered list of routes. The first matching entry wins.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    entries: Vec<RouteEntry>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named route to a view.
    pub fn register(&mut self, path: &'static str, name: &'static str, view: View) {
        self.entries.push(RouteEntry::new(
            RouteMeta {
                path,
                name: Some(name),
            },
            RouteTarget::View(view),
        ));
    }

    /// Register an unnamed redirect.
    pub fn redirect(&mut self, path: &'static str, to: impl Into<String>) {
        self.entries.push(RouteEntry::new(
            RouteMeta { path, name: None },
            RouteTarget::Redirect(to.into()),
        ));
    }

    /// Registered entries in match order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    fn find(&self, parts: &[&str]) -> Option<(&RouteEntry, BTreeMap<String, String>)> {
        self.entries
            .iter()
            .find_map(|entry| entry.capture(parts).map(|params| (entry, params)))
    }
}

/// Resolves URL paths against a [`RouteRegistry`].
#[derive(Debug, Clone)]
pub struct Router {
    registry: RouteRegistry,
}

impl Default for Router {
    fn default() -> Self {
        Self::storefront()
    }
}

impl Router {
    /// Build a router over a custom registry.
    pub fn new(registry: RouteRegistry) -> Self {
        Self { registry }
    }

    /// The storefront and admin route table.
    pub fn storefront() -> Self {
        let mut routes = RouteRegistry::new();
        routes.register("/", "UserHome", View::UserHome);
        routes.register("/order-confirm", "OrderConfirm", View::OrderConfirm);
        routes.register("/goods/:id", "ProductDetail", View::ProductDetail);
        routes.redirect("/manage", "/manage/home");
        routes.register("/manage/home", "ManageHome", View::ManageHome);
        routes.register("/manage/products", "ManageProducts", View::ManageProducts);
        routes.register("/manage/categories", "ManageCategories", View::ManageCategories);
        routes.register("/manage/orders", "ManageOrders", View::ManageOrders);
        Self::new(routes)
    }

    /// The underlying registry.
    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// Resolve a path, following redirects.
    ///
    /// Query strings, fragments and trailing slashes are ignored. Unknown
    /// paths and redirect loops resolve to `None`.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let mut current = normalize(path);
        for _ in 0..=MAX_REDIRECTS {
            let parts: Vec<&str> = split(&current).collect();
            let (entry, params) = self.registry.find(&parts)?;
            match entry.target() {
                RouteTarget::View(view) => {
                    return Some(RouteMatch {
                        view: *view,
                        name: entry.meta().name,
                        path: current,
                        params,
                    });
                }
                RouteTarget::Redirect(to) => {
                    tracing::debug!(from = %current, to = %to, "Following redirect");
                    current = normalize(to);
                }
            }
        }
        tracing::warn!(path, "Too many redirects");
        None
    }

    /// Build a concrete path for a named route, filling `:param` segments.
    pub fn path_for(&self, name: &str, params: &[(&str, &str)]) -> Option<String> {
        let entry = self
            .registry
            .entries()
            .iter()
            .find(|e| e.meta().name == Some(name))?;
        let mut parts = Vec::with_capacity(entry.segments.len());
        for segment in &entry.segments {
            match segment {
                Segment::Static(text) => parts.push(text.clone()),
                Segment::Param(key) => {
                    let (_, value) = params.iter().find(|(k, _)| k == key)?;
                    parts.push((*value).to_string());
                }
            }
        }
        Some(format!("/{}", parts.join("/")))
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|part| !part.is_empty())
}

fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let parts: Vec<&str> = split(path).collect();
    format!("/{}", parts.join("/"))
}
