//! Embedded client assets
//!
//! The hash router, the listings filter and the stylesheet are
//! compiled into the binary and written into the output tree on every
//! build. Their pure parts run headlessly under QuickJS, which is how
//! the tests below exercise them.

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Hash router evaluated by the index shell
pub const ROUTER_JS: &str = include_str!("js/router.js");

/// Listings filter evaluated by the projects page
pub const FILTER_JS: &str = include_str!("js/filter.js");

/// Site stylesheet
pub const SITE_CSS: &str = include_str!("css/site.css");

/// Write all embedded assets under the output directory
pub fn write_assets(public_dir: &Path) -> Result<()> {
    let js_dir = public_dir.join("js");
    fs::create_dir_all(&js_dir)?;
    fs::write(js_dir.join("router.js"), ROUTER_JS)?;
    fs::write(js_dir.join("filter.js"), FILTER_JS)?;

    let css_dir = public_dir.join("css");
    fs::create_dir_all(&css_dir)?;
    fs::write(css_dir.join("site.css"), SITE_CSS)?;

    tracing::debug!("Wrote client assets");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_js::{Context, JsValue};

    fn js_context(script: &str) -> Context {
        let context = Context::new().unwrap();
        context.eval(script).unwrap();
        context
    }

    fn eval_string(context: &Context, code: &str) -> String {
        match context.eval(code).unwrap() {
            JsValue::String(s) => s,
            other => panic!("expected string, got {:?}", other),
        }
    }

    fn eval_int(context: &Context, code: &str) -> i64 {
        match context.eval(code).unwrap() {
            JsValue::Int(n) => n as i64,
            JsValue::Float(f) => f as i64,
            other => panic!("expected number, got {:?}", other),
        }
    }

    #[test]
    fn test_write_assets() {
        let dir = tempfile::tempdir().unwrap();
        write_assets(dir.path()).unwrap();
        assert!(dir.path().join("js/router.js").exists());
        assert!(dir.path().join("js/filter.js").exists());
        assert!(dir.path().join("css/site.css").exists());
    }

    #[test]
    fn test_router_known_routes() {
        let context = js_context(ROUTER_JS);
        assert_eq!(
            eval_string(&context, "EstaticRouter.parseRoute('#/category/news').view"),
            "category"
        );
        assert_eq!(
            eval_string(
                &context,
                "EstaticRouter.parseRoute('#/category/news').category"
            ),
            "news"
        );
        assert_eq!(
            eval_string(
                &context,
                "EstaticRouter.parseRoute('#/post/guides/first-home').slug"
            ),
            "first-home"
        );
        assert_eq!(
            eval_string(&context, "EstaticRouter.parseRoute('#/market').view"),
            "market"
        );
        assert_eq!(
            eval_string(&context, "EstaticRouter.parseRoute('#/about').view"),
            "about"
        );
    }

    #[test]
    fn test_router_unknown_fragment_falls_back_to_home() {
        let context = js_context(ROUTER_JS);
        for fragment in ["", "#", "#/", "#/bogus", "#/bogus/route/x", "#/category"] {
            let code = format!("EstaticRouter.parseRoute('{}').view", fragment);
            assert_eq!(eval_string(&context, &code), "home", "fragment {:?}", fragment);
        }
    }

    #[test]
    fn test_router_renders_category_cards() {
        let context = js_context(ROUTER_JS);
        let html = eval_string(
            &context,
            r#"EstaticRouter.render(
                { view: 'category', category: 'news' },
                { news: [{ title: 'A & B', slug: 'a-b', category: 'news',
                           date: '2026-01-10T00:00:00+08:00', summary: 'Short take' }] },
                {}
            )"#,
        );
        assert!(html.contains("A &amp; B"));
        assert!(html.contains("#/post/news/a-b"));
        assert!(html.contains("Short take"));
    }

    #[test]
    fn test_router_post_view_and_miss() {
        let context = js_context(ROUTER_JS);
        context
            .eval(
                r#"var data = { news: [{ id: 'launch', title: 'Launch', slug: 'launch',
                    category: 'news', date: '2026-01-10T00:00:00+08:00',
                    author: 'Desk', content: '<p>Body</p>' }] };"#,
            )
            .unwrap();

        let hit = eval_string(
            &context,
            "EstaticRouter.render({ view: 'post', category: 'news', slug: 'launch' }, data, {})",
        );
        assert!(hit.contains("<h1>Launch</h1>"));
        assert!(hit.contains("<p>Body</p>"));

        let miss = eval_string(
            &context,
            "EstaticRouter.render({ view: 'post', category: 'news', slug: 'gone' }, data, {})",
        );
        assert!(miss.contains("Article not found"));
    }

    #[test]
    fn test_router_market_is_a_category_view() {
        let context = js_context(ROUTER_JS);
        let html = eval_string(
            &context,
            "EstaticRouter.render({ view: 'market' }, { market: [] }, {})",
        );
        assert!(html.contains("<h2>Market</h2>"));
        assert!(html.contains("No articles yet."));
    }

    #[test]
    fn test_filter_min_price_excludes_cheaper() {
        let context = js_context(FILTER_JS);
        let count = eval_int(
            &context,
            "EstaticFilter.applyFilters([{price: 400000}], {minPrice: '500000'}).length",
        );
        assert_eq!(count, 0);
        assert_eq!(
            eval_string(&context, "EstaticFilter.countLabel(0)"),
            "0 project(s) found"
        );
    }

    #[test]
    fn test_filter_location_matches_any_granularity() {
        let context = js_context(FILTER_JS);
        context
            .eval(
                r#"var records = [
                    { title: 'A', location: 'Mont Kiara' },
                    { title: 'B', city: 'Johor Bahru' },
                    { title: 'C', state: 'Penang' }
                ];"#,
            )
            .unwrap();
        assert_eq!(
            eval_int(
                &context,
                "EstaticFilter.applyFilters(records, {location: 'Mont Kiara'}).length"
            ),
            1
        );
        assert_eq!(
            eval_int(
                &context,
                "EstaticFilter.applyFilters(records, {location: 'Johor Bahru'}).length"
            ),
            1
        );
        assert_eq!(
            eval_int(
                &context,
                "EstaticFilter.applyFilters(records, {location: 'Penang'}).length"
            ),
            1
        );
        assert_eq!(
            eval_int(&context, "EstaticFilter.applyFilters(records, {}).length"),
            3
        );
    }

    #[test]
    fn test_filter_type_is_exact() {
        let context = js_context(FILTER_JS);
        let count = eval_int(
            &context,
            r#"EstaticFilter.applyFilters(
                [{type: 'Condo'}, {type: 'Condominium'}],
                {type: 'Condo'}
            ).length"#,
        );
        assert_eq!(count, 1);
    }

    #[test]
    fn test_filter_price_bounds_inclusive() {
        let context = js_context(FILTER_JS);
        context
            .eval("var records = [{title: 'X', price: 900000}];")
            .unwrap();
        assert_eq!(
            eval_int(&context, "EstaticFilter.applyFilters(records, {}).length"),
            1
        );
        assert_eq!(
            eval_int(
                &context,
                "EstaticFilter.applyFilters(records, {minPrice: '900000'}).length"
            ),
            1
        );
        assert_eq!(
            eval_int(
                &context,
                "EstaticFilter.applyFilters(records, {maxPrice: '900000'}).length"
            ),
            1
        );
        assert_eq!(
            eval_int(
                &context,
                "EstaticFilter.applyFilters(records, {maxPrice: '800000'}).length"
            ),
            0
        );
    }

    #[test]
    fn test_filter_keyword_case_insensitive_across_fields() {
        let context = js_context(FILTER_JS);
        context
            .eval(
                r#"var records = [{
                    title: 'Skyline Residences',
                    location: 'Mont Kiara',
                    state: 'Selangor',
                    developer: 'Apex Land'
                }];"#,
            )
            .unwrap();
        for keyword in ["skyline", "mont", "SELANGOR", "APEX"] {
            let code = format!(
                "EstaticFilter.applyFilters(records, {{keyword: '{}'}}).length",
                keyword
            );
            assert_eq!(eval_int(&context, &code), 1, "keyword {:?}", keyword);
        }
        assert_eq!(
            eval_int(
                &context,
                "EstaticFilter.applyFilters(records, {keyword: 'nowhere'}).length"
            ),
            0
        );
    }

    #[test]
    fn test_filter_keyword_does_not_search_city() {
        let context = js_context(FILTER_JS);
        context
            .eval("var records = [{ title: 'Lakefront Towers', city: 'Putrajaya' }];")
            .unwrap();
        // A term found only in the city field is no keyword hit
        assert_eq!(
            eval_string(
                &context,
                "EstaticFilter.countLabel(EstaticFilter.applyFilters(records, {keyword: 'putrajaya'}).length)"
            ),
            "0 project(s) found"
        );
        // The same value still narrows through the location predicate
        assert_eq!(
            eval_int(
                &context,
                "EstaticFilter.applyFilters(records, {location: 'Putrajaya'}).length"
            ),
            1
        );
    }

    #[test]
    fn test_filter_cards_and_count() {
        let context = js_context(FILTER_JS);
        let html = eval_string(
            &context,
            r#"EstaticFilter.renderCards([{
                title: 'Skyline & Views',
                url: '/projects/skyline-views.html',
                type: 'Condo',
                city: 'Kuala Lumpur',
                price_display: 'RM 500,000'
            }])"#,
        );
        assert!(html.contains("Skyline &amp; Views"));
        assert!(html.contains(r#"href="/projects/skyline-views.html""#));
        assert!(html.contains("RM 500,000"));
        assert_eq!(
            eval_string(&context, "EstaticFilter.countLabel(3)"),
            "3 project(s) found"
        );
        assert!(eval_string(&context, "EstaticFilter.renderCards([])")
            .contains("No matching projects"));
    }
}
