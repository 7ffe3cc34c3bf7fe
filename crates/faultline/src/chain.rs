//! Generic chain traversal.
//!
//! Every function here works on any `std::error::Error`, regardless of which
//! node kinds make up the chain. The direct cause of a node is its
//! [`source`](std::error::Error::source).

use crate::Node;

/// Iterator over a chain, outermost node first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl std::iter::FusedIterator for Chain<'_> {}

/// Iterate the chain starting at `node`, including `node` itself.
pub fn chain(node: &Node) -> Chain<'_> {
    Chain { next: Some(node) }
}

/// Get the node `node` wraps, if any.
pub fn direct_cause(node: &Node) -> Option<&Node> {
    node.source()
}

/// Follow direct causes until a node without one is reached, and return it.
pub fn deepest_cause(node: &Node) -> &Node {
    let mut current = node;
    while let Some(next) = current.source() {
        current = next;
    }
    current
}

/// Whether any node in the chain satisfies `predicate`. Stops at the first match.
pub fn is_by<F>(node: &Node, mut predicate: F) -> bool
where
    F: FnMut(&Node) -> bool,
{
    chain(node).any(|n| predicate(n))
}

/// Whether `target` itself (by identity) is part of the chain.
pub fn is_same(node: &Node, target: &Node) -> bool {
    is_by(node, |n| std::ptr::addr_eq(n as *const Node, target as *const Node))
}

/// Whether the chain holds a `T` equal to `target`.
pub fn is<T>(node: &Node, target: &T) -> bool
where
    T: std::error::Error + PartialEq + 'static,
{
    is_by(node, |n| n.downcast_ref::<T>() == Some(target))
}

/// Get the first node of concrete type `T` in the chain.
pub fn find<T>(node: &Node) -> Option<&T>
where
    T: std::error::Error + 'static,
{
    chain(node).find_map(|n| n.downcast_ref::<T>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoxError, Error, ErrorKind, annotate};

    #[derive(Debug, PartialEq)]
    struct Code(u32);

    impl std::fmt::Display for Code {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "code {}", self.0)
        }
    }

    impl std::error::Error for Code {}

    #[test]
    fn test_chain_order() {
        let err = Error::annotated(Error::traced(Error::new("root")), "top");
        let kinds: Vec<_> = err
            .chain()
            .map(|n| n.downcast_ref::<Error>().unwrap().kind())
            .collect();
        assert_eq!(
            kinds,
            vec![ErrorKind::Annotated, ErrorKind::Trace, ErrorKind::Plain]
        );
    }

    #[test]
    fn test_direct_cause() {
        let root = Error::new("root");
        assert!(direct_cause(&root).is_none());

        let err = Error::annotated(root, "ctx");
        assert_eq!(direct_cause(&err).unwrap().to_string(), "root");
    }

    #[test]
    fn test_deepest_cause_of_terminal_is_itself() {
        let root = Error::new("root");
        let deepest = deepest_cause(&root);
        assert!(std::ptr::addr_eq(deepest as *const Node, &root as *const Error));
    }

    #[test]
    fn test_deepest_cause_identity() {
        let root: BoxError = Box::new(Code(7));
        let addr = &*root as *const (dyn std::error::Error + Send + Sync);
        let err = annotate(Some(Error::traced(root)), "loading").unwrap();
        let deepest = deepest_cause(&err);
        assert!(std::ptr::addr_eq(deepest as *const Node, addr));
    }

    #[test]
    fn test_is_and_find() {
        let err = Error::annotated(Code(404), "fetching");
        assert!(is(&err, &Code(404)));
        assert!(!is(&err, &Code(500)));
        assert_eq!(find::<Code>(&err), Some(&Code(404)));
        assert!(find::<std::io::Error>(&err).is_none());

        let outer = find::<Error>(&err).unwrap();
        assert_eq!(outer.kind(), ErrorKind::Annotated);
    }

    #[test]
    fn test_is_same() {
        let root: BoxError = Box::new(Error::new("root"));
        let addr = &*root as *const (dyn std::error::Error + Send + Sync);
        let err = Error::annotated(root, "ctx");
        let inner = err.direct_cause().unwrap();
        assert!(std::ptr::addr_eq(inner as *const Node, addr));
        assert!(is_same(&err, inner));

        let stranger = Error::new("root");
        assert!(!is_same(&err, &stranger));
    }
}
