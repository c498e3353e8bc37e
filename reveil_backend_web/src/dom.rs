// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live DOM elements as style targets.

use alloc::vec::Vec;

use kurbo::Rect;
use reveil_core::element::StyleTarget;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, SvgElement};

/// A matched element the effects write inline styles and classes to.
///
/// Classes and geometry work for any element. Inline styles are reachable on
/// HTML and SVG elements; on anything else style writes are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomTarget(Element);

impl DomTarget {
    /// Wraps an element.
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    /// Returns the wrapped element.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.0
    }

    fn style(&self) -> Option<CssStyleDeclaration> {
        if let Some(html) = self.0.dyn_ref::<HtmlElement>() {
            Some(html.style())
        } else {
            self.0.dyn_ref::<SvgElement>().map(SvgElement::style)
        }
    }
}

impl StyleTarget for DomTarget {
    fn set_style(&self, property: &str, value: &str) {
        if let Some(style) = self.style() {
            let _ = style.set_property(property, value);
        }
    }

    fn remove_style(&self, property: &str) {
        if let Some(style) = self.style() {
            let _ = style.remove_property(property);
        }
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn bounding_rect(&self) -> Rect {
        let r = self.0.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.right(), r.bottom())
    }
}

/// Returns every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<DomTarget>, JsValue> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            out.push(DomTarget::new(el));
        }
    }
    Ok(out)
}
