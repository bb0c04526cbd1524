//! Request-cycle runtime
//!
//! [`Encore`] is what a template layer talks to. A host renders its
//! templates through it and then calls exactly one of
//! [`Encore::finish_response`] or [`Encore::fail_response`] so the next
//! request starts from a clean slate.
//!
//! One instance serves one in-flight request at a time; concurrent requests
//! need their own instance or external synchronization.

use crate::domain::entities::render_html;
use crate::domain::services::{merge_link_header, preload_links, TagRenderer};
use crate::domain::value_objects::{AssetType, Attributes};
use crate::error::EncoreResult;

pub struct Encore {
    renderer: TagRenderer,
    preload: bool,
}

impl Encore {
    pub fn new(renderer: TagRenderer, preload: bool) -> Self {
        Self { renderer, preload }
    }

    pub fn with_preload(mut self, preload: bool) -> Self {
        self.preload = preload;
        self
    }

    pub fn renderer(&self) -> &TagRenderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut TagRenderer {
        &mut self.renderer
    }

    pub fn preload_enabled(&self) -> bool {
        self.preload
    }

    /// JS files of `entry` not handed out yet in this request.
    pub fn js_files(&mut self, entry: &str, build: Option<&str>) -> EncoreResult<Vec<String>> {
        self.files(entry, AssetType::Js, build)
    }

    /// CSS files of `entry` not handed out yet in this request.
    pub fn css_files(&mut self, entry: &str, build: Option<&str>) -> EncoreResult<Vec<String>> {
        self.files(entry, AssetType::Css, build)
    }

    pub fn entry_exists(&mut self, entry: &str, build: Option<&str>) -> EncoreResult<bool> {
        self.renderer
            .registry_mut()
            .get_mut(build)?
            .entry_exists(entry)
    }

    /// `<script>` tags for `entry`, one per line.
    pub fn script_tags(
        &mut self,
        entry: &str,
        package: Option<&str>,
        build: Option<&str>,
        extra_attributes: &Attributes,
    ) -> EncoreResult<String> {
        let tags = self
            .renderer
            .render_scripts(entry, package, build, extra_attributes)?;
        Ok(render_html(&tags))
    }

    /// `<link rel="stylesheet">` tags for `entry`, one per line.
    pub fn link_tags(
        &mut self,
        entry: &str,
        package: Option<&str>,
        build: Option<&str>,
        extra_attributes: &Attributes,
    ) -> EncoreResult<String> {
        let tags = self
            .renderer
            .render_links(entry, package, build, extra_attributes)?;
        Ok(render_html(&tags))
    }

    /// End of a successful request.
    ///
    /// Returns the new `Link` header value when preloading is enabled and
    /// something was rendered; `None` leaves the header untouched. Lookups
    /// and the renderer are reset either way.
    pub fn finish_response(&mut self, existing_link_header: Option<&str>) -> Option<String> {
        let header = if self.preload {
            let crossorigin = self.renderer.default_attributes().get_str("crossorigin");
            let links = preload_links(
                self.renderer.rendered_scripts(),
                self.renderer.rendered_styles(),
                crossorigin,
            );
            merge_link_header(existing_link_header, &links)
        } else {
            None
        };

        self.reset();
        header
    }

    /// End of a failed request: drop all per-request state.
    pub fn fail_response(&mut self) {
        self.reset();
    }

    fn files(&mut self, entry: &str, asset_type: AssetType, build: Option<&str>) -> EncoreResult<Vec<String>> {
        self.renderer
            .registry_mut()
            .get_mut(build)?
            .files(entry, asset_type)
    }

    fn reset(&mut self) {
        self.renderer.registry_mut().reset_all();
        self.renderer.reset();
        tracing::trace!("request cycle reset");
    }
}
