use std::fmt;
use std::sync::Arc;

/// Stable identity of a column, unique within one table
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<&str> for ColumnId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A value extracted from a row by a column accessor
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Null => Ok(()),
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}

pub type Accessor<R> = Arc<dyn Fn(&R) -> CellValue + Send + Sync>;

/// What a header renderer sees at render time
#[derive(Debug, Clone, Copy)]
pub struct HeaderContext<'a> {
    pub column_id: &'a ColumnId,
    /// Current visual position of the column
    pub index: usize,
}

/// What a cell renderer sees at render time
pub struct CellContext<'a, R> {
    pub row: &'a R,
    pub row_index: usize,
    pub column_id: &'a ColumnId,
    pub value: &'a CellValue,
}

/// How a column's header is turned into text
#[derive(Clone)]
pub enum HeaderRenderer {
    /// Falls back to the column id
    Default,
    Text(String),
    Custom(Arc<dyn Fn(&HeaderContext<'_>) -> String + Send + Sync>),
}

impl HeaderRenderer {
    pub fn render(&self, ctx: &HeaderContext<'_>) -> String {
        match self {
            HeaderRenderer::Default => ctx.column_id.to_string(),
            HeaderRenderer::Text(text) => text.clone(),
            HeaderRenderer::Custom(render) => render(ctx),
        }
    }
}

impl fmt::Debug for HeaderRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderRenderer::Default => f.write_str("Default"),
            HeaderRenderer::Text(text) => f.debug_tuple("Text").field(text).finish(),
            HeaderRenderer::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// How a column's cells are turned into text
pub enum CellRenderer<R> {
    /// Display the accessor value as-is
    Value,
    Custom(Arc<dyn Fn(&CellContext<'_, R>) -> String + Send + Sync>),
}

impl<R> CellRenderer<R> {
    pub fn render(&self, ctx: &CellContext<'_, R>) -> String {
        match self {
            CellRenderer::Value => ctx.value.to_string(),
            CellRenderer::Custom(render) => render(ctx),
        }
    }
}

impl<R> Clone for CellRenderer<R> {
    fn clone(&self) -> Self {
        match self {
            CellRenderer::Value => CellRenderer::Value,
            CellRenderer::Custom(render) => CellRenderer::Custom(Arc::clone(render)),
        }
    }
}

impl<R> fmt::Debug for CellRenderer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRenderer::Value => f.write_str("Value"),
            CellRenderer::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Static description of one column. Only its position in the order changes
/// after construction.
pub struct ColumnDef<R> {
    id: ColumnId,
    accessor: Accessor<R>,
    header: HeaderRenderer,
    cell: CellRenderer<R>,
}

impl<R> ColumnDef<R> {
    /// Create a column that reads its value through `accessor`
    pub fn accessor<F>(id: impl Into<ColumnId>, accessor: F) -> Self
    where
        F: Fn(&R) -> CellValue + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            accessor: Arc::new(accessor),
            header: HeaderRenderer::Default,
            cell: CellRenderer::Value,
        }
    }

    /// Use a fixed header label
    pub fn header(mut self, label: impl Into<String>) -> Self {
        self.header = HeaderRenderer::Text(label.into());
        self
    }

    /// Render the header through a function
    pub fn header_with<F>(mut self, render: F) -> Self
    where
        F: Fn(&HeaderContext<'_>) -> String + Send + Sync + 'static,
    {
        self.header = HeaderRenderer::Custom(Arc::new(render));
        self
    }

    /// Render cells through a function instead of displaying the raw value
    pub fn cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellContext<'_, R>) -> String + Send + Sync + 'static,
    {
        self.cell = CellRenderer::Custom(Arc::new(render));
        self
    }

    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    pub fn value(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }

    pub fn cell_renderer(&self) -> &CellRenderer<R> {
        &self.cell
    }

    pub fn render_header(&self, index: usize) -> String {
        self.header.render(&HeaderContext {
            column_id: &self.id,
            index,
        })
    }
}

impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            accessor: Arc::clone(&self.accessor),
            header: self.header.clone(),
            cell: self.cell.clone(),
        }
    }
}

impl<R> fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("cell", &self.cell)
            .finish()
    }
}
