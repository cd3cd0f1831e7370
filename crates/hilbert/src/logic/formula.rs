//! Propositional formulas over implication and negation
//!
//! A `Formula` is an immutable, reference-counted tree. Equality and hashing
//! are structural: two formulas built independently from the same text are
//! equal and hash identically, so formulas can key the fact store and the
//! term universe directly.
//!
//! Each node caches its structural hash and size at construction time. The
//! cached hash is computed from the children's cached hashes, so building a
//! node is O(1) and comparing two unequal formulas usually stops at the root.

use std::collections::hash_map::DefaultHasher;
use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use thiserror::Error;

/// Default cap on atom name length
pub const MAX_ATOM_LEN: usize = 15;

/// Default cap on formula nesting depth (see [`Formula::depth`])
pub const MAX_FORMULA_DEPTH: usize = 256;

/// Reserved atom names that act as meta-variables inside axiom templates
pub const META_VARIABLE_NAMES: [&str; 3] = ["A", "B", "C"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("atom name `{name}` is longer than {max} characters")]
    NameTooLong { name: String, max: usize },

    #[error("invalid atom name `{0}`: expected one or more ASCII letters")]
    InvalidName(String),
}

/// The three shapes a formula can take
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaKind {
    Atom(Box<str>),
    Not(Formula),
    Implies(Formula, Formula),
}

#[derive(Debug)]
struct FormulaNode {
    kind: FormulaKind,
    hash: u64,
    size: usize,
}

/// A propositional formula.
///
/// Cloning is cheap and shares structure; since nodes are never mutated a
/// clone is observationally a deep copy. Use [`Formula::deep_clone`] when a
/// freshly allocated tree is required.
#[derive(Clone)]
pub struct Formula(Rc<FormulaNode>);

impl Formula {
    fn from_kind(kind: FormulaKind) -> Self {
        let mut hasher = DefaultHasher::new();
        let size = match &kind {
            FormulaKind::Atom(name) => {
                0u8.hash(&mut hasher);
                name.hash(&mut hasher);
                1
            }
            FormulaKind::Not(inner) => {
                1u8.hash(&mut hasher);
                hasher.write_u64(inner.0.hash);
                1 + inner.size()
            }
            FormulaKind::Implies(left, right) => {
                2u8.hash(&mut hasher);
                hasher.write_u64(left.0.hash);
                hasher.write_u64(right.0.hash);
                1 + left.size() + right.size()
            }
        };
        Formula(Rc::new(FormulaNode {
            kind,
            hash: hasher.finish(),
            size,
        }))
    }

    /// Create an atom, enforcing the default name length cap.
    pub fn atom(name: &str) -> Result<Self, FormulaError> {
        Self::atom_with_limit(name, MAX_ATOM_LEN)
    }

    /// Create an atom whose name may be at most `max_len` characters long.
    pub fn atom_with_limit(name: &str, max_len: usize) -> Result<Self, FormulaError> {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FormulaError::InvalidName(name.to_string()));
        }
        if name.len() > max_len {
            return Err(FormulaError::NameTooLong {
                name: name.to_string(),
                max: max_len,
            });
        }
        Ok(Self::from_kind(FormulaKind::Atom(name.into())))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: Formula) -> Self {
        Self::from_kind(FormulaKind::Not(operand))
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Self::from_kind(FormulaKind::Implies(left, right))
    }

    #[inline]
    pub fn kind(&self) -> &FormulaKind {
        &self.0.kind
    }

    /// `Some((left, right))` if this is `(left => right)`
    pub fn as_implies(&self) -> Option<(&Formula, &Formula)> {
        match self.kind() {
            FormulaKind::Implies(left, right) => Some((left, right)),
            _ => None,
        }
    }

    pub fn as_not(&self) -> Option<&Formula> {
        match self.kind() {
            FormulaKind::Not(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self.kind() {
            FormulaKind::Atom(name) => Some(name),
            _ => None,
        }
    }

    /// True for the reserved template atoms `A`, `B` and `C`
    pub fn is_meta_variable(&self) -> bool {
        self.as_atom()
            .map_or(false, |name| META_VARIABLE_NAMES.contains(&name))
    }

    /// Number of nodes in the tree
    #[inline]
    pub fn size(&self) -> usize {
        self.0.size
    }

    pub fn depth(&self) -> usize {
        match self.kind() {
            FormulaKind::Atom(_) => 1,
            FormulaKind::Not(inner) => 1 + inner.depth(),
            FormulaKind::Implies(left, right) => 1 + left.depth().max(right.depth()),
        }
    }

    /// All subformulas in post-order (children before parents, `self` last).
    /// Repeated subtrees are reported once per occurrence.
    pub fn subformulas(&self) -> Vec<Formula> {
        let mut out = Vec::with_capacity(self.size());
        self.collect_subformulas(&mut out);
        out
    }

    fn collect_subformulas(&self, out: &mut Vec<Formula>) {
        match self.kind() {
            FormulaKind::Atom(_) => {}
            FormulaKind::Not(inner) => inner.collect_subformulas(out),
            FormulaKind::Implies(left, right) => {
                left.collect_subformulas(out);
                right.collect_subformulas(out);
            }
        }
        out.push(self.clone());
    }

    /// Copy the whole tree into freshly allocated nodes.
    pub fn deep_clone(&self) -> Formula {
        match self.kind() {
            FormulaKind::Atom(name) => Self::from_kind(FormulaKind::Atom(name.clone())),
            FormulaKind::Not(inner) => Self::not(inner.deep_clone()),
            FormulaKind::Implies(left, right) => {
                Self::implies(left.deep_clone(), right.deep_clone())
            }
        }
    }

    /// True if both handles point at the same allocation
    pub fn ptr_eq(&self, other: &Formula) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Append the infix rendering to `out` and return the number of
    /// characters written. Callers use the length to align trace columns.
    pub fn render_into(&self, out: &mut String) -> usize {
        let start = out.len();
        // Writing into a String cannot fail
        let _ = write!(out, "{}", self);
        out.len() - start
    }

    pub fn render(&self) -> (String, usize) {
        let mut out = String::new();
        let len = self.render_into(&mut out);
        (out, len)
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
            || (self.0.hash == other.0.hash
                && self.0.size == other.0.size
                && self.0.kind == other.0.kind)
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.hash);
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            FormulaKind::Atom(name) => write!(f, "{}", name),
            FormulaKind::Not(inner) => write!(f, "!{}", inner),
            FormulaKind::Implies(left, right) => write!(f, "({} => {})", left, right),
        }
    }
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Formula({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn atom(name: &str) -> Formula {
        Formula::atom(name).unwrap()
    }

    fn imp(l: Formula, r: Formula) -> Formula {
        Formula::implies(l, r)
    }

    #[test]
    fn test_structural_equality() {
        let a = imp(atom("p"), Formula::not(atom("q")));
        let b = imp(atom("p"), Formula::not(atom("q")));
        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b);
        assert_ne!(a, imp(atom("q"), Formula::not(atom("p"))));
        assert_ne!(atom("p"), Formula::not(atom("p")));
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        let mut set = HashSet::new();
        set.insert(imp(atom("p"), atom("q")));
        assert!(set.contains(&imp(atom("p"), atom("q"))));
        assert!(!set.contains(&imp(atom("q"), atom("p"))));
    }

    #[test]
    fn test_render() {
        let f = imp(Formula::not(atom("p")), imp(atom("q"), atom("p")));
        let (text, len) = f.render();
        assert_eq!(text, "(!p => (q => p))");
        assert_eq!(len, text.len());

        let mut buf = String::from("  ");
        assert_eq!(atom("abc").render_into(&mut buf), 3);
        assert_eq!(buf, "  abc");
    }

    #[test]
    fn test_render_length_matches_counting_rule() {
        // implication adds "(", " => " and ")", negation adds "!"
        let f = imp(atom("ab"), Formula::not(atom("c")));
        assert_eq!(f.render().1, 6 + 2 + (1 + 1));
    }

    #[test]
    fn test_atom_name_validation() {
        assert!(Formula::atom("abcdefghijklmno").is_ok());
        assert_eq!(
            Formula::atom("abcdefghijklmnop"),
            Err(FormulaError::NameTooLong {
                name: "abcdefghijklmnop".into(),
                max: 15
            })
        );
        assert!(Formula::atom_with_limit("abcdefghijklmnop", 32).is_ok());
        assert_eq!(
            Formula::atom(""),
            Err(FormulaError::InvalidName(String::new()))
        );
        assert!(matches!(
            Formula::atom("p1"),
            Err(FormulaError::InvalidName(_))
        ));
    }

    #[test]
    fn test_deep_clone() {
        let f = imp(atom("p"), Formula::not(atom("q")));
        let g = f.deep_clone();
        assert_eq!(f, g);
        assert!(!f.ptr_eq(&g));
        let (fl, _) = f.as_implies().unwrap();
        let (gl, _) = g.as_implies().unwrap();
        assert!(!fl.ptr_eq(gl));
    }

    #[test]
    fn test_subformulas_post_order() {
        let f = imp(atom("p"), Formula::not(atom("q")));
        let subs: Vec<String> = f.subformulas().iter().map(|s| s.to_string()).collect();
        assert_eq!(subs, vec!["p", "q", "!q", "(p => !q)"]);
    }

    #[test]
    fn test_meta_variables_and_metrics() {
        assert!(atom("A").is_meta_variable());
        assert!(!atom("D").is_meta_variable());
        assert!(!Formula::not(atom("A")).is_meta_variable());

        let f = imp(atom("A"), imp(atom("B"), atom("A")));
        assert_eq!(f.size(), 5);
        assert_eq!(f.depth(), 3);
    }
}
