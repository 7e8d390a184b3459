use std::fmt;

/// A location in the source text.
///
/// Both fields are 1-based and point at the first character of the token a
/// node was built from. Positions are carried for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number in the source code.
    pub line:   usize,
    /// Column number (in characters) in the source code.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Identity of an AST node that later phases attach information to.
///
/// Ids are handed out densely in parse order, so parsing the same token
/// stream twice yields the same ids. The analyzer keys its resolution
/// side-table by these ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

/// A literal value as written in the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal, such as `42`.
    Integer(i64),
    /// A 64-bit floating-point literal, such as `3.14`.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// The root of a parsed source file: `PROGRAM name; block .`
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Name of the program (lowercase).
    pub name:     String,
    /// The program body.
    pub block:    Block,
    /// Location of the `PROGRAM` keyword.
    pub position: Position,
}

/// A declarations section followed by a compound statement.
///
/// Both the program body and every procedure body are blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Variable and procedure declarations, in source order.
    pub declarations: Vec<Declaration>,
    /// The `BEGIN ... END` section.
    pub compound:     CompoundStatement,
}

/// A single declaration in a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// `name : TYPE`
    Variable(VariableDeclaration),
    /// `PROCEDURE name (params); block;`
    Procedure(ProcedureDeclaration),
}

/// A variable (or formal parameter) declaration.
///
/// `VAR a, b : INTEGER;` produces two of these, one per name.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    /// The declared name (lowercase).
    pub name:          String,
    /// The declared type.
    pub type_spec:     TypeSpec,
    /// Location of the variable name.
    pub position:      Position,
    /// Location of the type name.
    pub type_position: Position,
}

/// A procedure declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureDeclaration {
    /// Procedure name (lowercase).
    pub name:     String,
    /// Formal parameters in declaration order.
    pub params:   Vec<VariableDeclaration>,
    /// The procedure body.
    pub block:    Block,
    /// Location of the procedure name.
    pub position: Position,
}

/// Built-in type names usable in declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeSpec {
    /// `INTEGER`
    Integer,
    /// `REAL`
    Real,
}

impl TypeSpec {
    /// The canonical (upper-case) spelling of the type name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
        }
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `BEGIN statement; statement; ... END`
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundStatement {
    /// The statements, with empty statements already dropped.
    pub statements: Vec<Statement>,
    /// Location of the `BEGIN` keyword.
    pub position:   Position,
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A nested `BEGIN ... END`.
    Compound(CompoundStatement),
    /// `target := value`
    Assignment {
        /// The variable being assigned.
        target: VariableRef,
        /// The assigned expression.
        value:  Expr,
    },
    /// `name(arg, ...)`
    ProcedureCall(ProcedureCall),
}

/// A call of a user-defined procedure.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureCall {
    /// Key into the analyzer's resolution table.
    pub id:        NodeId,
    /// Name of the called procedure (lowercase).
    pub name:      String,
    /// Actual arguments, in order.
    pub arguments: Vec<Expr>,
    /// Location of the procedure name.
    pub position:  Position,
}

/// A use of a variable, either as an assignment target or inside an
/// expression.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableRef {
    /// Key into the analyzer's resolution table.
    pub id:       NodeId,
    /// Name of the variable (lowercase).
    pub name:     String,
    /// Location of the name.
    pub position: Position,
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value:    LiteralValue,
        /// Location of the literal.
        position: Position,
    },
    /// Reference to a variable by name.
    Variable(VariableRef),
    /// A unary operation (`+x`, `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Location of the operator.
        position: Position,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Location of the operator.
        position: Position,
    },
}

impl Expr {
    /// Gets the source position of `self`.
    ///
    /// ## Example
    /// ```
    /// use pasquale::ast::{Expr, Position};
    ///
    /// let expr = Expr::Literal { value:    7.into(),
    ///                            position: Position::new(3, 9), };
    ///
    /// assert_eq!(expr.position(), Position::new(3, 9));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Variable(VariableRef { position, .. })
            | Self::Literal { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. } => *position,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`), always real-valued.
    Div,
    /// Truncating integer division (`DIV`)
    IntegerDiv,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Minus,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::IntegerDiv => "DIV",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
        }
    }
}
