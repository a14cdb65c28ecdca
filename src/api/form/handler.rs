// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Upload form handler

use axum::response::Html;

/// Static upload form posted to `/check`
pub const FORM_HTML: &str = r#"<html>
  <body>
    <h1>Hot Dog Checker</h1>
    <form action="/check" method="post" enctype="multipart/form-data">
      <label for="euid">Your EUID:</label><br>
      <input type="text" id="euid" name="euid" required /><br><br>

      <label for="image1">Upload first image:</label>
      <input type="file" id="image1" name="image1" accept="image/*" required><br><br>

      <label for="image2">Upload second image:</label>
      <input type="file" id="image2" name="image2" accept="image/*" required><br><br>

      <button type="submit">Check</button>
    </form>
  </body>
</html>
"#;

/// GET / - Render the upload form
pub async fn form_handler() -> Html<&'static str> {
    Html(FORM_HTML)
}
