// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! cells {
    // One table row from anything `Into<String>`
    ($($cell:expr),* $(,)?) => {
        ::std::vec![$(::std::string::String::from($cell)),*]
    };
}
