//! # Leaf Type Descriptors
//!
//! [`LeafType`] identifies a schema type kind plus its kind-specific
//! parameters: bit width and signedness for integers, fraction digits for
//! decimals, symbol vocabularies for enumerations and identities, flag
//! vocabularies for bit-sets, and length/pattern constraints for strings.
//!
//! A descriptor is attached once, at model-definition time, to every scalar
//! leaf and never mutated afterwards.

use regex::Regex;
use thiserror::Error;

/// Error raised while defining a schema. These are programmer/schema-source
/// defects caught at model-definition time, not runtime model errors.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A string pattern failed to compile.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern source text.
        pattern: String,
        /// The regex compiler's complaint.
        reason: String,
    },

    /// An enumeration declared no symbols.
    #[error("enumeration must declare at least one symbol")]
    EmptyEnumeration,

    /// A bits type declared no flags.
    #[error("bits type must declare at least one flag")]
    EmptyBits,

    /// An identityref declared no member identities.
    #[error("identityref must declare at least one identity")]
    EmptyIdentitySet,

    /// A decimal64 fraction-digit count outside 1..=18.
    #[error("decimal64 fraction-digits must be between 1 and 18, got {0}")]
    FractionDigits(u8),

    /// String length bounds with `min > max`.
    #[error("string length bounds are inverted: {min} > {max}")]
    InvertedLength {
        /// Declared minimum length.
        min: u64,
        /// Declared maximum length.
        max: u64,
    },

    /// Two declarations in one object share an element name.
    #[error("duplicate element name {name:?} in {object:?}")]
    DuplicateElement {
        /// The owning object's element name.
        object: String,
        /// The colliding element name.
        name: String,
    },

    /// A root schema registered twice under the same qualified name.
    #[error("schema {name:?} is already registered")]
    DuplicateSchema {
        /// The qualified `module:name` key.
        name: String,
    },
}

/// A compiled, implicitly anchored string pattern.
///
/// Schema patterns match the whole value, so the source is wrapped in
/// `^(?: )$` before compilation.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern from its schema source text.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidPattern`] when the source does not
    /// compile.
    pub fn new(source: &str) -> Result<Self, SchemaError> {
        let regex = Regex::new(&format!("^(?:{source})$")).map_err(|e| {
            SchemaError::InvalidPattern {
                pattern: source.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The original schema source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the whole candidate matches.
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

/// An enumeration's declared symbol vocabulary.
#[derive(Debug, Clone)]
pub struct EnumType {
    literals: Vec<String>,
}

impl EnumType {
    /// Declare an enumeration from its symbols, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptyEnumeration`] for an empty vocabulary.
    pub fn new<I, S>(literals: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let literals: Vec<String> = literals.into_iter().map(Into::into).collect();
        if literals.is_empty() {
            return Err(SchemaError::EmptyEnumeration);
        }
        Ok(Self { literals })
    }

    /// The declared symbols, in declaration order.
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// Whether `symbol` is declared.
    pub fn contains(&self, symbol: &str) -> bool {
        self.literals.iter().any(|l| l == symbol)
    }
}

/// A bits type's declared flag vocabulary.
#[derive(Debug, Clone)]
pub struct BitsType {
    flags: Vec<String>,
}

impl BitsType {
    /// Declare a bits type from its flag names, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptyBits`] for an empty vocabulary.
    pub fn new<I, S>(flags: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let flags: Vec<String> = flags.into_iter().map(Into::into).collect();
        if flags.is_empty() {
            return Err(SchemaError::EmptyBits);
        }
        Ok(Self { flags })
    }

    /// The declared flags, in declaration order.
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    /// Whether `flag` is declared.
    pub fn contains(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }
}

/// An identityref's resolvable member identities.
#[derive(Debug, Clone)]
pub struct IdentityType {
    members: Vec<String>,
}

impl IdentityType {
    /// Declare an identity set from the names derivable from the base.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptyIdentitySet`] for an empty set.
    pub fn new<I, S>(members: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members: Vec<String> = members.into_iter().map(Into::into).collect();
        if members.is_empty() {
            return Err(SchemaError::EmptyIdentitySet);
        }
        Ok(Self { members })
    }

    /// The member identity names.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Whether `name` resolves to a member identity.
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }
}

/// String length and pattern constraints.
#[derive(Debug, Clone, Default)]
pub struct StringType {
    length: Option<(u64, u64)>,
    patterns: Vec<Pattern>,
}

impl StringType {
    /// An unconstrained string type.
    pub fn any() -> Self {
        Self::default()
    }

    /// Add inclusive character-count bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvertedLength`] when `min > max`.
    pub fn with_length(mut self, min: u64, max: u64) -> Result<Self, SchemaError> {
        if min > max {
            return Err(SchemaError::InvertedLength { min, max });
        }
        self.length = Some((min, max));
        Ok(self)
    }

    /// Add a pattern constraint. All declared patterns must match.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidPattern`] when the source does not
    /// compile.
    pub fn with_pattern(mut self, source: &str) -> Result<Self, SchemaError> {
        self.patterns.push(Pattern::new(source)?);
        Ok(self)
    }

    /// The declared length bounds, if any.
    pub fn length(&self) -> Option<(u64, u64)> {
        self.length
    }

    /// The declared patterns.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

/// A schema type descriptor: the kind plus kind-specific parameters.
#[derive(Debug, Clone)]
pub enum LeafType {
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 8-bit unsigned integer.
    Uint8,
    /// 16-bit unsigned integer.
    Uint16,
    /// 32-bit unsigned integer.
    Uint32,
    /// 64-bit unsigned integer.
    Uint64,
    /// Fixed-point decimal with a declared fraction-digit count.
    Decimal64 {
        /// Declared fraction digits, 1..=18.
        fraction_digits: u8,
    },
    /// Boolean.
    Boolean,
    /// The presence-only singleton type.
    Empty,
    /// Enumeration over a declared symbol vocabulary.
    Enumeration(EnumType),
    /// Set of flags drawn from a declared vocabulary.
    Bits(BitsType),
    /// Reference to a declared identity.
    IdentityRef(IdentityType),
    /// String with optional length/pattern constraints.
    Str(StringType),
}

impl LeafType {
    /// Construct a decimal64 descriptor, checking the fraction-digit range.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::FractionDigits`] outside 1..=18.
    pub fn decimal64(fraction_digits: u8) -> Result<Self, SchemaError> {
        if !(1..=18).contains(&fraction_digits) {
            return Err(SchemaError::FractionDigits(fraction_digits));
        }
        Ok(LeafType::Decimal64 { fraction_digits })
    }

    /// An unconstrained string descriptor.
    pub fn string() -> Self {
        LeafType::Str(StringType::any())
    }

    /// The kind name, matching the schema language vocabulary.
    pub fn kind_name(&self) -> &'static str {
        match self {
            LeafType::Int8 => "int8",
            LeafType::Int16 => "int16",
            LeafType::Int32 => "int32",
            LeafType::Int64 => "int64",
            LeafType::Uint8 => "uint8",
            LeafType::Uint16 => "uint16",
            LeafType::Uint32 => "uint32",
            LeafType::Uint64 => "uint64",
            LeafType::Decimal64 { .. } => "decimal64",
            LeafType::Boolean => "boolean",
            LeafType::Empty => "empty",
            LeafType::Enumeration(_) => "enumeration",
            LeafType::Bits(_) => "bits",
            LeafType::IdentityRef(_) => "identityref",
            LeafType::Str(_) => "string",
        }
    }

    /// The inclusive `[min, max]` domain for integer kinds.
    pub(crate) fn int_domain(&self) -> Option<(i128, i128)> {
        match self {
            LeafType::Int8 => Some((i128::from(i8::MIN), i128::from(i8::MAX))),
            LeafType::Int16 => Some((i128::from(i16::MIN), i128::from(i16::MAX))),
            LeafType::Int32 => Some((i128::from(i32::MIN), i128::from(i32::MAX))),
            LeafType::Int64 => Some((i128::from(i64::MIN), i128::from(i64::MAX))),
            LeafType::Uint8 => Some((0, i128::from(u8::MAX))),
            LeafType::Uint16 => Some((0, i128::from(u16::MAX))),
            LeafType::Uint32 => Some((0, i128::from(u32::MAX))),
            LeafType::Uint64 => Some((0, i128::from(u64::MAX))),
            _ => None,
        }
    }

    /// A human-readable description of the type's domain, carried in
    /// validation failures so diagnostics name the expected vocabulary.
    pub fn domain_description(&self) -> String {
        if let Some((min, max)) = self.int_domain() {
            return format!("{} in [{min}, {max}]", self.kind_name());
        }
        match self {
            LeafType::Decimal64 { fraction_digits } => {
                format!("decimal64 with {fraction_digits} fraction-digits")
            }
            LeafType::Boolean => "boolean".to_string(),
            LeafType::Empty => "empty".to_string(),
            LeafType::Enumeration(e) => {
                format!("enumeration of [{}]", e.literals().join(", "))
            }
            LeafType::Bits(b) => format!("bits set of [{}]", b.flags().join(", ")),
            LeafType::IdentityRef(i) => {
                format!("identityref of [{}]", i.members().join(", "))
            }
            LeafType::Str(s) => {
                let mut desc = "string".to_string();
                let mut constraints = Vec::new();
                if let Some((min, max)) = s.length() {
                    constraints.push(format!("length {min}..={max}"));
                }
                for p in s.patterns() {
                    constraints.push(format!("pattern '{}'", p.source()));
                }
                if !constraints.is_empty() {
                    desc.push_str(&format!(" ({})", constraints.join(", ")));
                }
                desc
            }
            // Integer kinds returned above.
            other => other.kind_name().to_string(),
        }
    }
}
