//! Browser bindings
//!
//! Runs the table sorter against the live DOM and lets the request helper
//! read its token from `web_sys::Document`. Setup is an explicit call the
//! host page makes once its tables exist:
//!
//! ```rust,ignore
//! let document = web_sys::window().and_then(|w| w.document()).unwrap();
//! let tables = SortableTables::attach(&document, &ClientConfig::default())?;
//! tables.forget(); // keep the handlers for the lifetime of the page
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, HtmlTableRowElement, NodeList};

use crate::page::PageMeta;
use crate::shared::config::ClientConfig;
use crate::shared::error::ClientError;
use crate::table::model::check_column;
use crate::table::{compare_cells, SortDirection, SortState, TableRow};

/// Route panics to the browser console
pub fn install_panic_hook() {
    console_error_panic_hook::set_once();
}

impl PageMeta for Document {
    fn meta_content(&self, name: &str) -> Option<String> {
        let metas = self.query_selector_all("meta").ok()?;
        elements(&metas)
            .into_iter()
            .find(|meta| meta.get_attribute("name").as_deref() == Some(name))
            .and_then(|meta| meta.get_attribute("content"))
    }
}

fn js_error(value: JsValue) -> ClientError {
    ClientError::dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

type ClickHandler = Closure<dyn FnMut(Event)>;

/// One sortable table on the page and its sort state
struct LiveTable {
    element: Element,
    state: RefCell<SortState>,
}

impl LiveTable {
    fn sort(&self, column: usize) -> Result<SortDirection, ClientError> {
        let body = self
            .element
            .query_selector("tbody")
            .map_err(js_error)?
            .ok_or_else(|| ClientError::dom("sortable table has no tbody"))?;
        let row_elements = elements(&body.query_selector_all("tr").map_err(js_error)?);

        let mut rows: Vec<(TableRow, Element)> = row_elements
            .into_iter()
            .map(|row| (row_text(&row), row))
            .collect();
        let texts: Vec<TableRow> = rows.iter().map(|(text, _)| text.clone()).collect();
        check_column(&texts, column)?;

        let direction = self.state.borrow_mut().advance(column);
        rows.sort_by(|(a, _), (b, _)| compare_cells(&a.cells[column], &b.cells[column], direction));

        // Appending an existing child moves it to the end.
        for (_, row) in &rows {
            body.append_child(row).map_err(js_error)?;
        }

        if let Some(html) = self.element.dyn_ref::<HtmlElement>() {
            let dataset = html.dataset();
            dataset.set("sortDir", direction.as_attr()).map_err(js_error)?;
            dataset.set("sortCol", &column.to_string()).map_err(js_error)?;
        }

        tracing::debug!(column, direction = direction.as_attr(), rows = rows.len(), "Sorted table");
        Ok(direction)
    }
}

fn row_text(row: &Element) -> TableRow {
    let cells = match row.dyn_ref::<HtmlTableRowElement>() {
        Some(row) => {
            let cells = row.cells();
            (0..cells.length())
                .filter_map(|i| cells.item(i))
                .map(|cell| cell.text_content().unwrap_or_default())
                .collect()
        }
        None => Vec::new(),
    };
    TableRow { cells }
}

/// Click-to-sort handlers attached to every sortable table of a document.
///
/// Dropping this value removes the handlers; call [`SortableTables::forget`]
/// to keep them for the lifetime of the page.
pub struct SortableTables {
    tables: Vec<Rc<LiveTable>>,
    handlers: Vec<(Element, ClickHandler)>,
}

impl SortableTables {
    /// Find every marked table and bind a click handler to each `th`
    pub fn attach(document: &Document, config: &ClientConfig) -> Result<Self, ClientError> {
        let selector = format!("table[{}]", config.sortable_attribute);
        let found = elements(&document.query_selector_all(&selector).map_err(js_error)?);

        let mut tables = Vec::with_capacity(found.len());
        let mut handlers = Vec::new();

        for element in found {
            let table = Rc::new(LiveTable {
                element,
                state: RefCell::new(SortState::default()),
            });
            let headers = elements(&table.element.query_selector_all("th").map_err(js_error)?);

            for (column, th) in headers.into_iter().enumerate() {
                if let Some(html) = th.dyn_ref::<HtmlElement>() {
                    html.style().set_property("cursor", "pointer").map_err(js_error)?;
                }

                let target = Rc::clone(&table);
                let handler: ClickHandler = Closure::new(move |_event: Event| {
                    if let Err(e) = target.sort(column) {
                        tracing::error!(column, error = %e, "Table sort failed");
                        web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
                    }
                });
                th.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
                    .map_err(js_error)?;
                handlers.push((th, handler));
            }
            tables.push(table);
        }

        tracing::debug!(tables = tables.len(), "Attached sortable tables");
        Ok(Self { tables, handlers })
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Sort state of the table at `index`, in document order
    pub fn state(&self, index: usize) -> Option<SortState> {
        self.tables.get(index).map(|table| *table.state.borrow())
    }

    /// Same as a click on header `column` of table `index`
    pub fn header_click(&self, index: usize, column: usize) -> Result<SortDirection, ClientError> {
        let table = self
            .tables
            .get(index)
            .ok_or_else(|| ClientError::dom(format!("no sortable table at index {}", index)))?;
        table.sort(column)
    }

    /// Leak the handlers so they stay bound after this value is gone
    pub fn forget(mut self) {
        for (_, handler) in self.handlers.drain(..) {
            handler.forget();
        }
    }
}

impl Drop for SortableTables {
    fn drop(&mut self) {
        for (th, handler) in &self.handlers {
            let _ = th
                .remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        }
    }
}
