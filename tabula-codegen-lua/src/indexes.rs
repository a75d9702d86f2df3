use tabula_codegen::{CodeFragment, IndexSpec, Renderable};

use crate::naming::field_access;

/// Load-time loop filling one `<Table>By<Key>` map.
///
/// `ipairs` walks records in order, so a duplicated key maps to the last
/// record carrying it.
#[derive(Debug, Clone)]
pub struct IndexLoop<'a> {
    spec: &'a IndexSpec<'a>,
}

impl<'a> IndexLoop<'a> {
    pub fn new(spec: &'a IndexSpec<'a>) -> Self {
        Self { spec }
    }
}

impl Renderable for IndexLoop<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let map = field_access("tab", &self.spec.map_name);
        let table = field_access("tab", self.spec.table);
        let key = field_access("rec", &self.spec.key.name);

        vec![
            CodeFragment::line(format!("-- {} by {}", self.spec.table, self.spec.key.name)),
            CodeFragment::line(format!("{map} = {{}}")),
            CodeFragment::block(
                format!("for _, rec in ipairs({table}) do"),
                vec![CodeFragment::line(format!("{map}[{key}] = rec"))],
                Some("end".to_string()),
            ),
            CodeFragment::blank(),
        ]
    }
}
