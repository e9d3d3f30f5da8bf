// SPDX-License-Identifier: MPL-2.0

use once_cell::sync::Lazy;

/// Shared sanitizer for remote markup.
///
/// ammonia's defaults drop `script`/`style` with their content, every `on*`
/// handler and any URL scheme outside its allow-list. `id` and `class` are
/// kept so the popup's stylesheet still applies.
static SANITIZER: Lazy<ammonia::Builder<'static>> = Lazy::new(|| {
    let mut builder = ammonia::Builder::default();
    builder.add_generic_attributes(&["id", "class"]);
    builder
});

/// Strip script execution vectors from untrusted markup.
pub fn sanitize(markup: &str) -> String {
    SANITIZER.clean(markup).to_string()
}
