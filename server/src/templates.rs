//! Starter prompt templates
//!
//! A static catalogue the frontend offers on the empty-project screen.

use serde::Serialize;

/// One starter template
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
}

/// Built-in templates, in display order
pub const TEMPLATES: &[TemplateInfo] = &[
    TemplateInfo {
        name: "Landing Page",
        description: "Responsive HTML/CSS landing page.",
        prompt: "Create a modern, responsive product landing page with a header, hero section, features grid, pricing table, and footer. Use HTML and CSS (no frameworks). Use Placehold.co for images.",
    },
    TemplateInfo {
        name: "Admin Dashboard",
        description: "Admin layout with stats.",
        prompt: "Create a simple admin dashboard layout using HTML/CSS/JS. Include a sidebar, a top navbar, and a main content area with some dummy statistic cards and a table.",
    },
    TemplateInfo {
        name: "JS Game (Snake)",
        description: "Classic Snake game in JS.",
        prompt: "Create a fully functional Snake game using a single HTML file with internal CSS and JavaScript. It should have a start button and score tracking.",
    },
    TemplateInfo {
        name: "Personal Portfolio",
        description: "Developer personal site.",
        prompt: "Create a personal developer portfolio site. Sections: About, Skills, Projects, Contact. Dark mode aesthetic. HTML/CSS/JS.",
    },
    TemplateInfo {
        name: "PHP Login System",
        description: "Login form with PHP script.",
        prompt: "Create a simple login system with 'index.html' (login form), 'style.css', and 'login.php' (mock validation logic).",
    },
    TemplateInfo {
        name: "JS Calculator",
        description: "Interactive JS Calculator.",
        prompt: "Create a stylish, functional calculator web app using HTML, CSS, and vanilla JavaScript. Support basic arithmetic operations.",
    },
];
