//! Route resolution command.

use anyhow::{bail, Result};
use shop_router::{RouteTarget, Router};

use super::RouteArgs;
use crate::context::Context;

/// Run the route command.
pub async fn run(args: RouteArgs, ctx: &Context) -> Result<()> {
    let router = Router::storefront();

    let Some(path) = args.path else {
        list_routes(&router, ctx);
        return Ok(());
    };

    let Some(matched) = router.resolve(&path) else {
        bail!("No route matches {}", path);
    };

    if ctx.output.is_json() {
        ctx.output.json(&matched);
        return Ok(());
    }

    ctx.output.kv("View", &matched.view.to_string());
    if let Some(name) = matched.name {
        ctx.output.kv("Name", name);
    }
    ctx.output.kv("Path", &matched.path);
    for (key, value) in &matched.params {
        ctx.output.kv(key, value);
    }
    if matched.view.is_admin() {
        ctx.output.info("Admin console view");
    }
    Ok(())
}

fn list_routes(router: &Router, ctx: &Context) {
    let rows: Vec<(String, String, String)> = router
        .registry()
        .entries()
        .iter()
        .map(|entry| {
            let meta = entry.meta();
            let target = match entry.target() {
                RouteTarget::View(view) => view.to_string(),
                RouteTarget::Redirect(to) => format!("-> {}", to),
            };
            (meta.path.to_string(), meta.name.unwrap_or("").to_string(), target)
        })
        .collect();

    if ctx.output.is_json() {
        let routes: Vec<_> = rows
            .iter()
            .map(|(path, name, target)| {
                serde_json::json!({ "path": path, "name": name, "target": target })
            })
            .collect();
        ctx.output.json(&routes);
        return;
    }

    ctx.output.header("Routes");
    for (path, name, target) in &rows {
        ctx.output.table_row(&[path, name, target], &[22, 18, 20]);
    }
}
