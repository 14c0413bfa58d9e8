//! SyntaxKind enum for all tokens and nodes in the list-language CST.
//!
//! Following the rust-analyzer model, all tokens and nodes share a single enum.
//! Every byte in the source must appear as a token in the tree.

/// All syntax kinds for the list-language CST.
///
/// This enum represents both tokens (lexer output) and composite nodes (parser output).
/// The `repr(u16)` ensures efficient storage in rowan's green tree.
///
/// We use SCREAMING_CASE following the rust-analyzer convention for SyntaxKind.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // === Tokens (lexer output) ===
    /// Horizontal whitespace (spaces, tabs)
    WHITESPACE,
    /// Line ending
    NEWLINE,
    /// `// ...` line comment
    COMMENT,
    /// `,` separator
    COMMA,
    /// `;` separator or statement terminator
    SEMICOLON,
    /// `(` opening argument and parameter lists
    L_PAREN,
    /// `)` closing argument and parameter lists
    R_PAREN,
    /// `{` opening variant lists
    L_CURLY,
    /// `}` closing variant lists
    R_CURLY,
    /// `fn` keyword
    FN_KW,
    /// `enum` keyword
    ENUM_KW,
    /// Identifier
    IDENT,
    /// Decimal integer literal
    INT_NUMBER,
    /// Double-quoted string literal
    STRING,
    /// Bytes the lexer does not recognize
    UNKNOWN,
    /// End of file marker
    EOF,

    // === Composite Nodes (parser output) ===
    /// Root node
    SOURCE_FILE,
    /// `fn name(params);`
    FN_DEF,
    /// `(a, b)` after a function name
    PARAM_LIST,
    /// Single parameter
    PARAM,
    /// `enum Name { A, B }`
    ENUM_DEF,
    /// `{ A, B }` after an enum name
    VARIANT_LIST,
    /// Single enum variant
    VARIANT,
    /// Declared name of a function, parameter, enum or variant
    NAME,
    /// Expression used as a statement
    EXPR_STMT,
    /// `callee(args)`
    CALL_EXPR,
    /// `(a, b)` after a callee
    ARG_LIST,
    /// Identifier used as an expression
    PATH_EXPR,
    /// Integer or string literal
    LITERAL,

    /// Error recovery node
    ERROR,
}

impl SyntaxKind {
    /// Returns true if this kind represents a token (lexer output).
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::EOF as u16)
    }

    /// Returns true if this kind represents a composite node.
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    /// Returns true if this kind is trivia (whitespace, newlines, comments).
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::NEWLINE | Self::COMMENT)
    }

    /// Returns true if this kind can separate the elements of a list.
    pub fn is_separator(self) -> bool {
        matches!(self, Self::COMMA | Self::SEMICOLON)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// The separator a list synthesizes when an edit needs a new one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SeparatorKind {
    #[default]
    Comma,
    Semicolon,
}

impl SeparatorKind {
    pub fn syntax_kind(self) -> SyntaxKind {
        match self {
            SeparatorKind::Comma => SyntaxKind::COMMA,
            SeparatorKind::Semicolon => SyntaxKind::SEMICOLON,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            SeparatorKind::Comma => ",",
            SeparatorKind::Semicolon => ";",
        }
    }

    pub fn from_syntax_kind(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::COMMA => Some(SeparatorKind::Comma),
            SyntaxKind::SEMICOLON => Some(SeparatorKind::Semicolon),
            _ => None,
        }
    }
}

/// Language definition for rowan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeplistLang {}

impl rowan::Language for SeplistLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::ERROR as u16);
        // SAFETY: We check bounds above and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type alias for our syntax nodes.
pub type SyntaxNode = rowan::SyntaxNode<SeplistLang>;
/// Type alias for our syntax tokens.
pub type SyntaxToken = rowan::SyntaxToken<SeplistLang>;
/// Type alias for syntax elements (node or token).
pub type SyntaxElement = rowan::SyntaxElement<SeplistLang>;
