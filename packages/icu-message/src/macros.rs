//! Declaration Macro
//!
//! Call sites are parsed statically by the extraction tool, so every argument
//! must be a literal. The macro grammar enforces that.

/// Declares an ICU message template and returns it unchanged.
///
/// ```
/// use icu_message::declare_icu_template;
///
/// let msg = declare_icu_template!(
///     "Hi, {NAME}!",
///     description = "greets user",
///     example = { NAME: "Jane" },
/// );
/// assert_eq!(msg, "Hi, {NAME}!");
/// ```
///
/// Builds with debug assertions validate the declaration. Other builds
/// assume the build pipeline did and pass the template through.
///
/// # Panics
///
/// Panics with the violation message when validation runs and fails.
#[macro_export]
macro_rules! declare_icu_template {
    (
        $template:literal,
        description = $description:literal
        $(, meaning = $meaning:literal)?
        $(, example = { $($example_name:ident : $example_value:literal),* $(,)? })?
        $(, original_code = { $($code_name:ident : $code_value:literal),* $(,)? })?
        $(,)?
    ) => {{
        let options = $crate::MessageOptions::new($description)
            $(.with_meaning($meaning))?
            $($(.with_example(stringify!($example_name), $example_value))*)?
            $($(.with_original_code(stringify!($code_name), $code_value))*)?;
        $crate::TemplateValidator::new($crate::ExecutionMode::for_build(cfg!(debug_assertions)))
            .assert_valid($template, &options)
    }};
}
