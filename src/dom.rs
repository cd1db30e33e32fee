use crate::constants::*;
use crate::frame::{with_app, App};
use crate::style;
use glam::DVec2;
use starwave_core::{GallerySurface, StarId, StarRegistry, Surface, Viewport, WaveEvent};
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current `innerWidth` x `innerHeight`; zero when unavailable.
pub fn read_viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

#[inline]
fn set_style(el: &web::Element, prop: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(prop, value);
    }
}

#[inline]
fn set_root_var(document: &web::Document, name: &str, value: &str) {
    if let Some(root) = document.document_element() {
        set_style(&root, name, value);
    }
}

/// Build one element per star in a fragment and attach it to `#starfield`
/// in a single insertion. Returns the elements indexed by `StarId`.
pub fn mount_stars(
    document: &web::Document,
    stars: &StarRegistry,
) -> anyhow::Result<Vec<web::Element>> {
    let starfield = document
        .get_element_by_id(STARFIELD_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", STARFIELD_ID))?;
    let fragment = document.create_document_fragment();
    let mut elements = Vec::with_capacity(stars.len());
    for (_, star) in stars.iter() {
        let el = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        el.set_class_name(&style::star_class_name(star.size));
        set_style(&el, "left", &style::percent(star.position.x));
        set_style(&el, "top", &style::percent(star.position.y));
        set_style(&el, "animation-delay", &style::seconds(star.twinkle_delay_s));
        set_style(&el, "animation-duration", &style::seconds(star.twinkle_duration_s));
        _ = fragment.append_child(&el);
        elements.push(el);
    }
    starfield
        .append_child(&fragment)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    log::info!("[dom] mounted {} stars", elements.len());
    Ok(elements)
}

/// Presentation surface backed by the live page.
pub struct DomSurface {
    window: web::Window,
    document: web::Document,
    stars: Vec<web::Element>,
    ripple: Option<web::Element>,
    wave_layer: Option<web::Element>,
    app: Weak<RefCell<App>>,
}

impl DomSurface {
    pub fn new(window: web::Window, document: web::Document, stars: Vec<web::Element>) -> Self {
        Self {
            window,
            document,
            stars,
            ripple: None,
            wave_layer: None,
            app: Weak::new(),
        }
    }

    /// Where image load failures get reported.
    pub(crate) fn attach(&mut self, app: Weak<RefCell<App>>) {
        self.app = app;
    }

    fn set_wave_class(&self, on: bool) {
        for id in [BACKGROUND_ID, STARFIELD_ID] {
            if let Some(el) = self.document.get_element_by_id(id) {
                let cl = el.class_list();
                if on {
                    // Restart the CSS animation if the class lingered.
                    _ = cl.remove_1(WAVE_CLASS);
                    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
                        _ = html.offset_width();
                    }
                    _ = cl.add_1(WAVE_CLASS);
                } else {
                    _ = cl.remove_1(WAVE_CLASS);
                }
            }
        }
    }

    fn create(&self, tag: &str, class: &str) -> Option<web::Element> {
        let el = self.document.create_element(tag).ok()?;
        el.set_class_name(class);
        Some(el)
    }

    fn gallery_container(&self) -> Option<web::Element> {
        if let Some(el) = self.document.get_element_by_id(GALLERY_CONTAINER_ID) {
            return Some(el);
        }
        let el = self.create("div", GALLERY_CONTAINER_CLASS)?;
        el.set_id(GALLERY_CONTAINER_ID);
        let body = self.document.body()?;
        body.append_child(&el).ok()?;
        Some(el)
    }
}

impl Surface for DomSurface {
    fn viewport(&self) -> Viewport {
        read_viewport(&self.window)
    }

    fn set_sparkle(&mut self, star: StarId, on: bool) {
        if let Some(el) = self.stars.get(star.0) {
            let cl = el.class_list();
            if on {
                _ = cl.add_1(SPARKLE_CLASS);
            } else {
                _ = cl.remove_1(SPARKLE_CLASS);
            }
        }
    }

    fn show_ripple(&mut self, wave: &WaveEvent) {
        self.clear_ripple();
        let pct = wave.origin_percent();
        set_root_var(&self.document, CLICK_X_VAR, &style::percent(pct.x));
        set_root_var(&self.document, CLICK_Y_VAR, &style::percent(pct.y));

        if let (Some(body), Some(ripple)) = (self.document.body(), self.create("div", RIPPLE_CLASS))
        {
            set_style(&ripple, "left", &style::px(wave.origin.x));
            set_style(&ripple, "top", &style::px(wave.origin.y));
            _ = body.append_child(&ripple);
            self.ripple = Some(ripple);
        }

        if let (Some(background), Some(layer)) = (
            self.document.get_element_by_id(BACKGROUND_ID),
            self.create("div", WAVE_LAYER_CLASS),
        ) {
            set_style(&layer, "left", &style::percent(pct.x));
            set_style(&layer, "top", &style::percent(pct.y));
            set_style(&layer, MAX_SIZE_VAR, &style::px(wave.visual_size));
            _ = background.append_child(&layer);
            self.wave_layer = Some(layer);
        }
    }

    fn set_wave_active(&mut self, active: bool) {
        self.set_wave_class(active);
    }

    fn clear_ripple(&mut self) {
        if let Some(el) = self.ripple.take() {
            el.remove();
        }
        if let Some(el) = self.wave_layer.take() {
            el.remove();
        }
        // Layers left behind by an interrupted page script.
        if let Some(background) = self.document.get_element_by_id(BACKGROUND_ID) {
            if let Ok(stale) = background.query_selector_all(&format!(".{WAVE_LAYER_CLASS}")) {
                for i in 0..stale.length() {
                    if let Some(el) = stale.item(i).and_then(|n| n.dyn_into::<web::Element>().ok())
                    {
                        el.remove();
                    }
                }
            }
        }
    }
}

impl GallerySurface for DomSurface {
    fn enter_gallery(&mut self, origin_percent: DVec2) {
        set_root_var(&self.document, GALLERY_CLICK_X_VAR, &style::percent(origin_percent.x));
        set_root_var(&self.document, GALLERY_CLICK_Y_VAR, &style::percent(origin_percent.y));
        if let Some(body) = self.document.body() {
            _ = body.class_list().add_1(GALLERY_MODE_CLASS);
        }
    }

    fn show_gallery_image(&mut self, src: &str) {
        let Some(container) = self.gallery_container() else {
            log::warn!("[gallery] no image container");
            return;
        };
        _ = container.class_list().remove_1(FADE_OUT_CLASS);
        if let Ok(old) = container.query_selector_all(&format!(".{GALLERY_IMAGE_CLASS}")) {
            for i in 0..old.length() {
                let Some(el) = old.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
                    continue;
                };
                // Images already faded out on the previous swap are gone by now.
                if el.class_list().contains(FADE_OUT_CLASS) {
                    el.remove();
                } else {
                    _ = el.class_list().add_1(FADE_OUT_CLASS);
                }
            }
        }
        let Some(img) = self
            .create("img", GALLERY_IMAGE_CLASS)
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
        else {
            return;
        };
        let app = self.app.clone();
        let broken = img.clone();
        let failed_src = src.to_string();
        let on_error = Closure::once_into_js(move || {
            broken.remove();
            with_app(&app, |a| a.gallery_image_failed(&failed_src));
        });
        img.set_onerror(Some(on_error.unchecked_ref()));
        img.set_src(src);
        img.set_alt(GALLERY_IMAGE_ALT);
        _ = img.class_list().add_1(FADE_IN_CLASS);
        _ = container.append_child(&img);
    }

    fn exit_gallery(&mut self) {
        if let Some(container) = self.document.get_element_by_id(GALLERY_CONTAINER_ID) {
            _ = container.class_list().add_1(FADE_OUT_CLASS);
        }
        if let Some(body) = self.document.body() {
            let cl = body.class_list();
            _ = cl.remove_1(GALLERY_MODE_CLASS);
            _ = cl.add_1(GALLERY_EXIT_CLASS);
        }
    }

    fn finish_gallery_exit(&mut self) {
        if let Some(container) = self.document.get_element_by_id(GALLERY_CONTAINER_ID) {
            container.remove();
        }
        if let Some(body) = self.document.body() {
            _ = body.class_list().remove_1(GALLERY_EXIT_CLASS);
        }
    }
}
