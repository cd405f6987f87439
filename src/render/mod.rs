/*!
 * Markup rendering.
 *
 * - `markup`: inline styled spans for tokens and dialog blocks
 * - `page`: a standalone HTML page with legend and translation panels
 */

pub mod markup;
pub mod page;

pub use self::markup::{escape_html, render_dialog, render_tokens, LINE_BREAK};
pub use self::page::{render_page, PagePanel};
