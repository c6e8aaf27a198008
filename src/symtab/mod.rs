//! Scope-aware symbol table
//!
//! A chained hash table over a fixed prime number of buckets, with every
//! entry stamped with the scope depth it was installed at. The parser owns
//! the protocol: it calls [`SymbolTable::enter_scope`] /
//! [`SymbolTable::exit_scope`] at block and function boundaries and
//! [`SymbolTable::install`] at declarations, in strict LIFO order.
//!
//! # Shadowing
//!
//! Entries for the same name may coexist at different depths. A lookup
//! returns the visible entry with the greatest depth not exceeding the
//! current depth, so an inner declaration hides an outer one until its
//! scope closes. Redeclaring a name at the same depth is not rejected:
//! both entries are retained and the newest wins.
//!
//! # Ownership
//!
//! There is no global table and no ambient depth counter. Each compilation
//! session constructs its own `SymbolTable`, so independent compilations
//! can never observe each other's symbols.

use std::fmt;

use tracing::debug;

use crate::ast::nodes::{DataType, Shape};

/// Number of hash buckets. A prime spreads djb2 output well for typical
/// identifier sets; the table never resizes, which is acceptable because
/// symbol counts are bounded by the size of a single source file.
pub const TABLE_SIZE: usize = 101;

/// One named entry: what was declared, its shape, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub ty: DataType,
    pub shape: Shape,
    /// First dimension for arrays and matrices, zero otherwise.
    pub size1: usize,
    /// Second dimension for matrices, zero otherwise.
    pub size2: usize,
    /// Scope depth the entry was installed at. 0 is global.
    pub depth: u32,
}

/// djb2 (seed 5381, multiply by 33 and add each byte), reduced modulo the
/// table size. Pure: equal strings always land in the same bucket.
pub fn hash(name: &str) -> usize {
    let mut h: u32 = 5381;
    for b in name.bytes() {
        h = (h << 5).wrapping_add(h).wrapping_add(u32::from(b));
    }
    (h as usize) % TABLE_SIZE
}

/// Chained hash table with scope-depth bookkeeping.
#[derive(Debug)]
pub struct SymbolTable {
    /// Newest entries sit at the end of each bucket; lookups scan in
    /// reverse so chain order stands in for the classic head insertion.
    buckets: Vec<Vec<Symbol>>,
    depth: u32,
}

impl SymbolTable {
    /// An empty table at global depth.
    pub fn new() -> Self {
        SymbolTable {
            buckets: vec![Vec::new(); TABLE_SIZE],
            depth: 0,
        }
    }

    /// Current scope depth. 0 is global.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Open a nested scope. Symbols installed from now on are stamped with
    /// the new depth.
    pub fn enter_scope(&mut self) {
        self.depth += 1;
    }

    /// Close the current scope: every entry installed at this depth is
    /// removed, then the depth drops back to the parent's.
    ///
    /// # Panics
    ///
    /// Panics when called at global depth. Scope calls must nest in strict
    /// LIFO correspondence; an unmatched exit is a bug in the caller, not a
    /// recoverable condition.
    pub fn exit_scope(&mut self) {
        assert!(self.depth > 0, "exit_scope without a matching enter_scope");
        for bucket in &mut self.buckets {
            bucket.retain(|sym| sym.depth != self.depth);
        }
        self.depth -= 1;
    }

    /// Install a new entry under the current depth.
    ///
    /// Redeclarations are not rejected: a duplicate name at the same depth
    /// is simply appended and, being newer, wins subsequent lookups.
    pub fn install(&mut self, name: &str, ty: DataType, shape: Shape, size1: usize, size2: usize) {
        match shape {
            Shape::Function => debug!(name, "function declared (global)"),
            Shape::Unit => debug!(name, "unit installed"),
            Shape::Array => debug!(name, size = size1, "array installed"),
            Shape::Matrix => debug!(name, rows = size1, cols = size2, "matrix installed"),
            Shape::Scalar => debug!(name, scope = self.depth, "variable installed"),
        }

        self.buckets[hash(name)].push(Symbol {
            name: name.to_string(),
            ty,
            shape,
            size1,
            size2,
            depth: self.depth,
        });
    }

    /// Find the visible entry for `name`: greatest depth not exceeding the
    /// current depth, newest first among equals. `None` is the
    /// "symbol not found" signal.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        let mut best: Option<&Symbol> = None;
        for sym in self.buckets[hash(name)].iter().rev() {
            if sym.name != name || sym.depth > self.depth {
                continue;
            }
            match best {
                Some(found) if found.depth >= sym.depth => {}
                _ => best = Some(sym),
            }
        }
        best
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}

/// Bucket dump for debugging, newest entry first (lookup preference order).
impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- symbol table (depth {}) ---", self.depth)?;
        for (idx, bucket) in self.buckets.iter().enumerate() {
            if bucket.is_empty() {
                continue;
            }
            write!(f, "[{}]:", idx)?;
            for sym in bucket.iter().rev() {
                write!(f, " {} (scope {}) ->", sym.name, sym.depth)?;
            }
            writeln!(f, " NULL")?;
        }
        Ok(())
    }
}
