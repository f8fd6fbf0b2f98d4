const LOGIN_CSS: &str = "\
body{margin:0;background:linear-gradient(135deg,#667eea,#764ba2);font-family:Inter,system-ui,Segoe UI,Roboto,Helvetica,Arial,sans-serif}\
.wrap{min-height:100vh;display:flex;align-items:center;justify-content:center;padding:24px}\
.card{background:#fff;border-radius:12px;box-shadow:0 20px 40px rgba(0,0,0,.12);padding:28px;max-width:360px;width:100%}\
.card h1{margin:0 0 8px 0;font-size:20px;color:#2c3e50}\
.card p{margin:0 0 16px 0;color:#555}\
.card p.error{color:#c00;margin:0 0 12px 0}\
label{display:block;margin:0 0 8px 0;color:#2c3e50;font-weight:600;font-size:14px}\
input[type=password]{width:100%;padding:12px 14px;border:2px solid #e1e8ed;border-radius:8px;font-size:14px;outline:none}\
input[type=password]:focus{border-color:#667eea}\
button{width:100%;margin-top:14px;background:#667eea;color:#fff;border:0;padding:12px 16px;border-radius:8px;font-weight:600;cursor:pointer}\
button:hover{background:#5a6fd8}";

pub fn render_login(invalid: bool) -> String {
    let error = if invalid {
        r#"<p class="error">Incorrect password</p>"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head><meta charset="UTF-8"><meta name="viewport" content="width=device-width, initial-scale=1.0"><title>Admin Login</title><style>{css}</style></head><body><div class="wrap"><div class="card"><h1>Admin Access</h1><p>Enter password to continue</p>{error}
<form method="POST" action="/admin" enctype="application/x-www-form-urlencoded"><label for="pw">Password</label><input id="pw" name="password" type="password" autofocus placeholder="••••••••" /><button type="submit">Continue</button></form>
</div></div></body></html>"#,
        css = LOGIN_CSS,
        error = error,
    )
}
