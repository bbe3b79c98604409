//! Browser bindings (feature `wasm`).
//!
//! [`WebElement`] and [`WebDocument`] implement the element seams over
//! `web-sys`; [`JsAnimator`] exposes the controller to JavaScript as
//! `new Animator(target, options)`.

use crate::animation::AnimationConfig;
use crate::controller::Animator;
use crate::element::{ElementHandle, ElementResolver, StylesheetSink, Target};
use crate::result::{AnimatorResult, ConfigurationError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// `web_sys::HtmlElement` as an [`ElementHandle`]
#[derive(Debug, Clone)]
pub struct WebElement {
    element: HtmlElement,
}

impl WebElement {
    /// Wrap an element
    #[must_use]
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// The wrapped element
    #[must_use]
    pub fn as_html_element(&self) -> &HtmlElement {
        &self.element
    }
}

impl ElementHandle for WebElement {
    fn id(&self) -> Option<String> {
        let id = self.element.id();
        (!id.is_empty()).then_some(id)
    }

    fn set_id(&self, id: &str) {
        self.element.set_id(id);
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.element.class_list().add_1(class) {
            tracing::warn!(class = %class, error = %js_message(&err), "failed to add class");
        }
    }

    fn set_inline_style(&self, property: &str, value: &str) {
        if let Err(err) = self.element.style().set_property(property, value) {
            tracing::warn!(property = %property, error = %js_message(&err), "failed to set inline style");
        }
    }

    fn inline_style(&self, property: &str) -> Option<String> {
        self.element
            .style()
            .get_property_value(property)
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        let window = web_sys::window()?;
        let style = window.get_computed_style(&self.element).ok()??;
        style
            .get_property_value(property)
            .ok()
            .filter(|value| !value.is_empty())
    }
}

/// The live document: selector resolution plus its `<head>` as sink
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    /// Wrap a document
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The window's document
    pub fn current() -> AnimatorResult<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or_else(|| ConfigurationError::dom("no window document available"))
    }
}

impl ElementResolver for WebDocument {
    type Element = WebElement;

    fn query_selector(&self, selector: &str) -> Option<WebElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .map(WebElement::new)
    }
}

impl StylesheetSink for WebDocument {
    fn append(&mut self, css: &str) -> AnimatorResult<()> {
        let head = self
            .document
            .head()
            .ok_or_else(|| ConfigurationError::dom("document has no <head>"))?;
        let style = self
            .document
            .create_element("style")
            .map_err(|err| ConfigurationError::dom(js_message(&err)))?;
        style.set_text_content(Some(css));
        head.append_child(&style)
            .map_err(|err| ConfigurationError::dom(js_message(&err)))?;
        tracing::trace!(bytes = css.len(), "appended <style> to document head");
        Ok(())
    }
}

/// JavaScript-facing animator
#[wasm_bindgen(js_name = Animator)]
#[derive(Debug)]
pub struct JsAnimator {
    inner: Animator<WebElement>,
}

#[wasm_bindgen(js_class = Animator)]
impl JsAnimator {
    /// `new Animator(target, options)`: `target` is a selector or an
    /// `HTMLElement`, `options` an object or an array of objects.
    #[wasm_bindgen(constructor)]
    pub fn new(target: JsValue, options: JsValue) -> Result<JsAnimator, JsError> {
        console_error_panic_hook::set_once();

        let target = if let Some(selector) = target.as_string() {
            Target::Selector(selector)
        } else {
            match target.dyn_into::<HtmlElement>() {
                Ok(element) => Target::Element(WebElement::new(element)),
                Err(other) => {
                    let found = other.js_typeof().as_string().unwrap_or_default();
                    return Err(ConfigurationError::invalid_target(found).into());
                }
            }
        };

        let json = js_sys::JSON::stringify(&options)
            .ok()
            .and_then(|text| text.as_string())
            .ok_or_else(|| ConfigurationError::invalid_shape("a value that cannot be serialized"))?;
        let config = AnimationConfig::from_json_str(&json)?;

        let mut document = WebDocument::current()?;
        let inner = Animator::create(&mut document, target, &config)?;
        Ok(Self { inner })
    }

    /// Generated identifier
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> String {
        self.inner.id().to_string()
    }

    /// Generated class name
    #[wasm_bindgen(getter, js_name = className)]
    pub fn class_name(&self) -> String {
        self.inner.class_name().to_string()
    }

    /// Run the animation
    pub fn play(&self) -> JsAnimator {
        self.inner.play();
        self.handle()
    }

    /// Pause the animation
    pub fn pause(&self) -> JsAnimator {
        self.inner.pause();
        self.handle()
    }

    /// Flip between running and paused
    pub fn toggle(&self) -> JsAnimator {
        self.inner.toggle();
        self.handle()
    }

    /// Write `animation-delay`
    pub fn seek(&self, value: &str) -> JsAnimator {
        self.inner.seek(value);
        self.handle()
    }
}

impl JsAnimator {
    /// A second handle onto the same element, returned from every control so
    /// JavaScript callers can chain them.
    fn handle(&self) -> JsAnimator {
        JsAnimator {
            inner: self.inner.clone(),
        }
    }
}
