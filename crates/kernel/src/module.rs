use async_trait::async_trait;
use axum::Router;

/// What a module can see while it boots
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
}

/// Lifecycle contract every bookshelf module implements
#[async_trait]
pub trait Module: Sync + Send {
    /// Registry key; two modules may not share one
    fn name(&self) -> &'static str;

    /// Runs once, after storage is connected and before any module starts
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Handlers this module serves, merged at the root of the app router
    fn routes(&self) -> Router {
        Router::new()
    }

    /// `paths` and `components` to fold into `/docs/openapi.json`
    fn openapi(&self) -> Option<serde_json::Value> {
        None
    }

    /// Runs after every module has initialized, before the listener binds
    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Runs after the server drains, in reverse registration order
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
