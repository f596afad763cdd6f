//! Prompt templates for the assistant commands.
//!
//! Fixed, single-shot prompts; the user's text is always appended
//! after the instruction so a pasted error or file never rewrites the
//! task itself.

/// Explain a pasted error message and suggest a fix.
pub fn explain_error(error: &str) -> String {
    format!(
        "Explain what this error means and why it is occurring, using an example, \
         and suggest a way to fix it, here is the error: \n{error}"
    )
}

/// Scan code for errors, explain them, and suggest fixes.
pub fn diagnose(code: &str) -> String {
    format!(
        "Look for any errors in this code and explain what each error means and why \
         it is occurring, using an example, and suggest a way in which the error can \
         be fixed, here is the code: \n{code}"
    )
}

/// Rewrite code for better time/space complexity, code only.
pub fn optimize(code: &str) -> String {
    format!(
        "Optimize and improve this code, aiming for O(n) time and space complexity \
         or better, remove all redundancies, and add a short comment above each \
         changed section explaining what it does. Only return the code, nothing \
         else, here is the code: \n{code}"
    )
}

/// Produce a documented rendition of the code without changing it.
pub fn document(code: &str) -> String {
    format!(
        "Add documentation to the following code without making any changes to the \
         code itself, and include the documentation along with the code, here is \
         the code: \n{code}"
    )
}

/// Exercise the code with hypothetical inputs and report findings.
pub fn run_test(code: &str) -> String {
    format!(
        "You are testing code for vulnerabilities, bugs and errors. Run a test on \
         the code I provide, using random valid inputs on functions where \
         applicable, and report what you find, here is the code: \n{code}"
    )
}
