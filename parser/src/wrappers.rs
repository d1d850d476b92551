use heck::ToShoutySnakeCase;

pub struct ConstName(pub String);

impl ConstName {
    pub fn character(id: &str) -> Self {
        let name = id.to_shouty_snake_case();
        match name.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => Self(name),
            _ => Self(format!("ID_{name}")),
        }
    }
}

pub fn join_strlist<I: IntoIterator>(strlist: I) -> String
where
    <I as IntoIterator>::Item: std::fmt::Display,
{
    strlist
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}
