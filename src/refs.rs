use crate::PDFError;
use pdf_writer::Ref;
use std::collections::HashMap;

/// Every kind of indirect object the writer emits, keyed by the arena or page
/// index it belongs to
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Page(usize),
    ContentForPage(usize),
    Font(usize),
    CidFont(usize),
    FontDescriptor(usize),
    FontData(usize),
    ToUnicode(usize),
}

/// Hands out sequential object ids and remembers which object each id was
/// allocated for
pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next_id: 1,
        }
    }

    /// Allocate a fresh id for `ref_type`, replacing any previous allocation
    pub fn alloc(&mut self, ref_type: RefType) -> Ref {
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        self.refs.insert(ref_type, id);
        id
    }

    /// Look up an id that must already have been allocated
    pub fn require(&self, ref_type: RefType) -> Result<Ref, PDFError> {
        self.refs
            .get(&ref_type)
            .copied()
            .ok_or(PDFError::UnresolvedReference(ref_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_remembered() {
        let mut refs = ObjectReferences::new();
        let catalog = refs.alloc(RefType::Catalog);
        let tree = refs.alloc(RefType::PageTree);
        assert_eq!(catalog.get() + 1, tree.get());
        assert_eq!(refs.require(RefType::PageTree).unwrap(), tree);
        assert!(matches!(
            refs.require(RefType::Page(3)),
            Err(PDFError::UnresolvedReference(RefType::Page(3)))
        ));
    }
}
