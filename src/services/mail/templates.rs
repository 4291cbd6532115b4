//! 메일 본문 템플릿 (askama, HTML 자동 이스케이프)

use askama::Template;

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Activate your account</title>
    <style>
        body { font-family: Arial, sans-serif; color: #333; background-color: #f4f4f4; padding: 20px; }
        .container { max-width: 600px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; }
        .code { font-size: 28px; font-weight: bold; letter-spacing: 6px; text-align: center; margin: 24px 0; }
        .footer { margin-top: 30px; font-size: 12px; color: #666; }
    </style>
</head>
<body>
    <div class="container">
        <h2>Welcome to {{ app_name }}</h2>
        <p>Hello {{ name }},</p>
        <p>Thank you for registering. Please use the following code to activate your account:</p>
        <div class="code">{{ activation_code }}</div>
        <p>Please enter this code on the activation page within {{ expire_minutes }} minutes.</p>
        <div class="footer">
            <p>If you did not register for a {{ app_name }} account, please ignore this email.</p>
        </div>
    </div>
</body>
</html>"#,
    ext = "html"
)]
pub struct ActivationMail<'a> {
    pub app_name: &'a str,
    pub name: &'a str,
    pub activation_code: &'a str,
    pub expire_minutes: i64,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Question Reply</title>
    <style>
        body { font-family: Arial, sans-serif; color: #333; background-color: #f4f4f4; padding: 20px; }
        .container { max-width: 600px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; }
    </style>
</head>
<body>
    <div class="container">
        <h2>New reply to your question</h2>
        <p>Hello {{ name }},</p>
        <p>A new reply has been added to your question in the lesson <strong>{{ title }}</strong>.</p>
        <p>Log in to {{ app_name }} to read it.</p>
    </div>
</body>
</html>"#,
    ext = "html"
)]
pub struct QuestionReplyMail<'a> {
    pub app_name: &'a str,
    pub name: &'a str,
    pub title: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_mail_renders_code() {
        let html = ActivationMail {
            app_name: "Learning Platform",
            name: "Jane",
            activation_code: "4821",
            expire_minutes: 5,
        }
        .render()
        .unwrap();

        assert!(html.contains("Hello Jane,"));
        assert!(html.contains("4821"));
        assert!(html.contains("within 5 minutes"));
    }

    #[test]
    fn test_question_reply_mail_escapes_html() {
        let html = QuestionReplyMail {
            app_name: "Learning Platform",
            name: "<script>",
            title: "Ownership & Borrowing",
        }
        .render()
        .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("Ownership &amp; Borrowing"));
    }
}
