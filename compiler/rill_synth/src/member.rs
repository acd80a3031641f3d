//! Synthesized member declarations.

use std::sync::{Arc, OnceLock};

use rill_ir::{Name, StringInterner, TypeId};

use crate::body::Body;
use crate::shape::{ContainingType, RecordShape};
use crate::synthesize;

/// Source-level visibility of a synthesized member.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Visibility {
    Public,
    Private,
}

/// Passing mode of a member parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParamMode {
    /// Ordinary by-value parameter.
    Value,
    /// Out parameter, written by the member body (deconstruction).
    Out,
}

/// One parameter of a synthesized member's signature.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: Name,
    pub ty: TypeId,
    pub mode: ParamMode,
}

impl Param {
    /// By-value parameter.
    pub fn value(name: Name, ty: TypeId) -> Self {
        Param {
            name,
            ty,
            mode: ParamMode::Value,
        }
    }

    /// Out parameter.
    pub fn out(name: Name, ty: TypeId) -> Self {
        Param {
            name,
            ty,
            mode: ParamMode::Out,
        }
    }
}

/// Parameter and return types of a synthesized member.
///
/// For properties and backing fields, `ret` is the member's type and
/// `params` is empty.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Signature {
    pub params: Vec<Param>,
    pub ret: TypeId,
}

impl Signature {
    /// Signature with no parameters.
    pub fn returning(ret: TypeId) -> Self {
        Signature {
            params: Vec::new(),
            ret,
        }
    }

    /// Signature with parameters.
    pub fn new(params: Vec<Param>, ret: TypeId) -> Self {
        Signature { params, ret }
    }
}

/// The closed set of member kinds a record declaration synthesizes.
///
/// The exhaustive `match` in the body dispatcher guarantees that no kind is
/// left without a body-generation rule.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MemberKind {
    /// The primary initializer.
    Initializer,
    /// Public get-only property for positional member `index`.
    Property { index: u32 },
    /// Private write-once backing field for positional member `index`.
    BackingField { index: u32 },
    /// Getter accessor for positional member `index`.
    Getter { index: u32 },
    /// Structural equality test.
    Equality,
    /// Structural hash function.
    Hash,
    /// Textual representation.
    Display,
    /// Positional deconstruction.
    Deconstruct,
}

impl MemberKind {
    /// The positional member index, for the per-field kinds.
    pub fn field_index(&self) -> Option<u32> {
        match self {
            MemberKind::Property { index }
            | MemberKind::BackingField { index }
            | MemberKind::Getter { index } => Some(*index),
            _ => None,
        }
    }
}

/// One synthesized member declaration.
///
/// Created during declaration expansion and immutable thereafter, except
/// for the one-shot memoized body: the body is computed the first time
/// [`SynthesizedMember::body`] is called and cached for every later call.
#[derive(Debug)]
pub struct SynthesizedMember {
    kind: MemberKind,
    name: Name,
    signature: Signature,
    containing: Arc<ContainingType>,
    shape: Arc<RecordShape>,
    body: OnceLock<Option<Body>>,
}

impl SynthesizedMember {
    pub(crate) fn new(
        kind: MemberKind,
        name: Name,
        signature: Signature,
        containing: Arc<ContainingType>,
        shape: Arc<RecordShape>,
    ) -> Self {
        SynthesizedMember {
            kind,
            name,
            signature,
            containing,
            shape,
            body: OnceLock::new(),
        }
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Backing fields are private to the containing type; every other
    /// synthesized member is public.
    pub fn visibility(&self) -> Visibility {
        match self.kind {
            MemberKind::BackingField { .. } => Visibility::Private,
            _ => Visibility::Public,
        }
    }

    pub fn name(&self) -> Name {
        self.name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn containing(&self) -> &ContainingType {
        &self.containing
    }

    pub fn shape(&self) -> &RecordShape {
        &self.shape
    }

    /// The member's executable body, synthesized on first demand.
    ///
    /// Returns `None` for the kinds that never have a body (properties and
    /// backing fields), and for the initializer when the base type has no
    /// accessible parameterless initializer (degraded mode; the condition
    /// is diagnosed before expansion, not here).
    ///
    /// Concurrent first calls race benignly: synthesis is pure and
    /// deterministic, and the cell keeps a single winner, so every caller
    /// observes the same body.
    pub fn body(&self, interner: &StringInterner) -> Option<&Body> {
        self.body
            .get_or_init(|| synthesize::member_body(self, interner))
            .as_ref()
    }
}
