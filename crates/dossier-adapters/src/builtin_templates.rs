//! Built-in HTML document templates.
//!
//! One template per documented lifecycle state, keyed by the same path
//! fragments the [`crate::StaticPathProvider`] hands out. Placeholders use
//! `{{SCREAMING_SNAKE_CASE}}` and are substituted by the
//! [`crate::SubstitutionViewRenderer`].

use crate::path_provider::{ACTIVATED_PATH, IN_REVIEW_PATH, PENDING_PATH};

pub const PENDING_TEMPLATE: &str = "\
<html>
  <body>
    <h1>Application {{REFERENCE_NUMBER}}</h1>
    <p>Status: {{STATE}}</p>
    <p>Applicant: {{FULL_NAME}}</p>
    <p>Applied on: {{APPLIED_ON}}</p>
    <p>Your application is awaiting activation.</p>
    <p>Questions? Contact {{SUPPORT_EMAIL}}</p>
    <p>{{SIGNATURE}}</p>
  </body>
</html>
";

pub const ACTIVATED_TEMPLATE: &str = "\
<html>
  <body>
    <h1>Application {{REFERENCE_NUMBER}}</h1>
    <p>Status: {{STATE}}</p>
    <p>Applicant: {{FULL_NAME}}</p>
    {{LEGAL_ENTITY_BLOCK}}
    <p>Applied on: {{APPLIED_ON}}</p>
    <h2>Portfolio</h2>
    <ul>
{{PORTFOLIO_FUNDS}}
    </ul>
    <p>Portfolio total (after fees, at the configured rate): {{PORTFOLIO_TOTAL}}</p>
    <p>Questions? Contact {{SUPPORT_EMAIL}}</p>
    <p>{{SIGNATURE}}</p>
  </body>
</html>
";

pub const IN_REVIEW_TEMPLATE: &str = "\
<html>
  <body>
    <h1>Application {{REFERENCE_NUMBER}}</h1>
    <p>Status: {{STATE}}</p>
    <p>Applicant: {{FULL_NAME}}</p>
    {{LEGAL_ENTITY_BLOCK}}
    <p>Applied on: {{APPLIED_ON}}</p>
    <p>{{IN_REVIEW_MESSAGE}}</p>
    <p>Review opened {{REVIEW_OPENED_ON}} by {{REVIEWER}}: {{REVIEW_REASON}}</p>
    <h2>Portfolio</h2>
    <ul>
{{PORTFOLIO_FUNDS}}
    </ul>
    <p>Portfolio total (after fees, at the configured rate): {{PORTFOLIO_TOTAL}}</p>
    <p>Questions? Contact {{SUPPORT_EMAIL}}</p>
    <p>{{SIGNATURE}}</p>
  </body>
</html>
";

/// All built-in templates as `(path fragment, markup)` pairs.
pub fn all_templates() -> Vec<(&'static str, &'static str)> {
    vec![
        (PENDING_PATH, PENDING_TEMPLATE),
        (ACTIVATED_PATH, ACTIVATED_TEMPLATE),
        (IN_REVIEW_PATH, IN_REVIEW_TEMPLATE),
    ]
}
