//! TypeScript-flavoured rendering of lattice values.
//!
//! Used by compiler logs and test failure messages. The syntax mirrors the
//! source language the lattice models: `"hello"`, `42n`, `number[]`,
//! `[string, number]`, `{ kind: "ok"; message: string }`,
//! `Record<string, boolean>`, with union members joined by ` | `. The empty
//! union renders as `never`.

use crate::access::{Accessor, Occurrence};
use crate::literal::Literal;
use crate::types::{Type, Union};
use std::fmt;

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n}"),
            Literal::String(s) => write!(f, "{s:?}"),
            Literal::Boolean(b) => write!(f, "{b}"),
            Literal::BigInt(big) => {
                if big.negative {
                    write!(f, "-{}n", big.digits)
                } else {
                    write!(f, "{}n", big.digits)
                }
            }
            Literal::Undefined => write!(f, "undefined"),
            Literal::Null => write!(f, "null"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Unknown => write!(f, "unknown"),
            Type::Literal(literal) => write!(f, "{literal}"),
            Type::Primitive(kind) => write!(f, "{}", kind.type_of()),
            Type::Tuple(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            }
            Type::Array(element) => {
                // Parenthesize multi-member element unions: `(A | B)[]`.
                if element.len() == 1 {
                    write!(f, "{element}[]")
                } else {
                    write!(f, "({element})[]")
                }
            }
            Type::Object(fields) => {
                if fields.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{ ")?;
                for (i, (name, field)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    let marker = if field.optional { "?" } else { "" };
                    write!(f, "{name}{marker}: {}", field.union)?;
                }
                write!(f, " }}")
            }
            Type::Record(value) => write!(f, "Record<string, {value}>"),
        }
    }
}

impl fmt::Display for Union {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "never");
        }
        for (i, ty) in self.types().iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{ty}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Property(name) => write!(f, ".{name}"),
            Accessor::Index(index) => write!(f, "[{index}]"),
            Accessor::ArrayElement => write!(f, "[*]"),
            Accessor::RecordValues => write!(f, "{{*}}"),
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for accessor in self.accessors() {
            write!(f, "{accessor}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ObjectField;
    use crate::PrimitiveKind;

    #[test]
    fn test_type_rendering() {
        let ty = Type::object([
            (
                "kind",
                ObjectField::required(Union::single(Type::literal_string("ok"))),
            ),
            (
                "tags",
                ObjectField::optional(Union::single(Type::Array(Union::single(
                    Type::Primitive(PrimitiveKind::String),
                )))),
            ),
        ]);
        assert_eq!(ty.to_string(), r#"{ kind: "ok"; tags?: string[] }"#);
    }

    #[test]
    fn test_union_rendering() {
        let u = Union::new(vec![
            Type::literal_bigint(false, "42"),
            Type::undefined(),
            Type::Array(Union::new(vec![
                Type::Primitive(PrimitiveKind::Number),
                Type::null(),
            ])),
        ]);
        assert_eq!(u.to_string(), "42n | undefined | (number | null)[]");
        assert_eq!(Union::never().to_string(), "never");
    }

    #[test]
    fn test_occurrence_rendering() {
        let occ = Occurrence::new([
            Accessor::Property("items".into()),
            Accessor::ArrayElement,
            Accessor::Index(0),
        ]);
        assert_eq!(occ.to_string(), "$.items[*][0]");
    }
}
