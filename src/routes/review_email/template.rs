use crate::domain::UserType;

pub const DASHBOARD_URL: &str = "https://proconnect.ng/dashboard";
pub const SUPPORT_EMAIL: &str = "support@artisan-hub.com";

/// Subject and HTML body of the registration email.
pub struct WelcomeEmail {
    pub subject: String,
    pub html: String,
}

impl WelcomeEmail {
    pub fn new(first_name: &str, user_type: UserType) -> Self {
        let subject = match user_type {
            UserType::Artisan => format!(
                "Welcome to ArtisanHub, {}! Your Artisan Profile is Pending Review",
                first_name
            ),
            UserType::Client => format!("Welcome to ArtisanHub, {}!", first_name),
        };

        let (intro, next_step) = match user_type {
            UserType::Artisan => (ARTISAN_REVIEW_NOTICE, ARTISAN_NEXT_STEP),
            UserType::Client => (CLIENT_MESSAGE, CLIENT_NEXT_STEP),
        };

        let html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Welcome to ArtisanHub</title>
  <style>{style}</style>
</head>
<body>
  <table cellpadding="0" cellspacing="0" border="0" width="100%" style="background-color: #f4f4f4; padding: 20px 0;">
    <tr>
      <td align="center">
        <table class="container" cellpadding="0" cellspacing="0" border="0">
          <tr>
            <td class="header">
              <h1>🎉 Welcome to ArtisanHub!</h1>
              <p style="font-size: 18px; margin: 10px 0 0 0;">Hello {first_name},</p>
            </td>
          </tr>
          <tr>
            <td class="content">
              <h2 class="welcome">Congratulations on your registration!</h2>
              {intro}
              <div class="next-steps">
                <h3>What's Next?</h3>
                <ul>
                  <li>Complete your profile with more details about yourself</li>
                  {next_step}
                  <li>Start browsing services and connecting with professionals</li>
                </ul>
              </div>
              <div class="cta">
                <a href="{dashboard}">Get Started Now</a>
              </div>
            </td>
          </tr>
          <tr>
            <td class="footer">
              <p>Need help? Reply to this email or contact our support team at <a href="mailto:{support}">{support}</a></p>
              <p>© 2025 ArtisanHub. All rights reserved.<br>123 Artisan Street, Creative City, Innovation Country</p>
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>
"#,
            style = STYLE,
            first_name = htmlescape::encode_minimal(first_name),
            intro = intro,
            next_step = next_step,
            dashboard = DASHBOARD_URL,
            support = SUPPORT_EMAIL,
        );

        Self { subject, html }
    }
}

const ARTISAN_REVIEW_NOTICE: &str = r#"<div class="review-notice">
                <p><strong>Your Artisan Profile is Under Review</strong></p>
                <p>Thank you for joining as an artisan! Your profile has been submitted and is currently pending review by our team. You'll be notified via email once your profile is approved and you can start connecting with clients.</p>
              </div>"#;

const CLIENT_MESSAGE: &str = r#"<p class="message">You're now ready to discover amazing artisans and book services that fit your needs!</p>"#;

const ARTISAN_NEXT_STEP: &str =
    "<li>Upload your portfolio and certifications (if applicable)</li>";

const CLIENT_NEXT_STEP: &str = "<li>Save your favorite artisans</li>";

const STYLE: &str = r#"
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 0; background-color: #f4f4f4; }
    .container { max-width: 600px; margin: 0 auto; background-color: #ffffff; border-radius: 8px; overflow: hidden; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
    .header { background-color: #4a90e2; padding: 40px 20px; text-align: center; color: white; }
    .header h1 { margin: 0; font-size: 28px; }
    .content { padding: 40px 30px; }
    .welcome { font-size: 18px; color: #333; margin-bottom: 20px; }
    .message { line-height: 1.6; color: #666; margin-bottom: 25px; }
    .review-notice { background-color: #fff3cd; border: 1px solid #ffeaa7; border-radius: 6px; padding: 20px; margin: 20px 0; }
    .review-notice p { color: #856404; margin: 0; }
    .review-notice strong { display: block; margin-bottom: 10px; }
    .next-steps { background-color: #e9ecef; border-radius: 6px; padding: 20px; margin: 25px 0; }
    .next-steps h3 { color: #333; margin: 0 0 10px 0; font-size: 16px; }
    .next-steps ul { margin: 0; padding-left: 20px; list-style-type: disc; color: #666; line-height: 1.6; }
    .cta { text-align: center; margin: 30px 0; }
    .cta a { background-color: #4a90e2; color: white; padding: 12px 30px; text-decoration: none; border-radius: 6px; font-weight: 500; display: inline-block; }
    .footer { background-color: #f8f9fa; padding: 20px; text-align: center; font-size: 12px; color: #999; border-top: 1px solid #e9ecef; }
    .footer a { color: #4a90e2; text-decoration: none; }
    @media screen and (max-width: 480px) {
      .content { padding: 30px 20px; }
      .header { padding: 30px 20px; }
    }
  "#;
