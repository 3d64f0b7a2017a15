//! Workshops command - static showcase text.

pub fn showcase() -> &'static str {
    r#"Our Workshops - develop your skills in 8 days

  Web Development
    Learn HTML, CSS, JavaScript, and modern frameworks like React.

  Data Science
    Dive into Python, data analysis, and machine learning techniques.

  UI/UX Design
    Master design tools and create beautiful, user-friendly interfaces.

Bootcamp tracks open for registration: Frontend, Backend.
Register with: bitup register <full-name> <discord-user> <email> <motivation> <bootcamp>..."#
}
