// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Result page rendering

use crate::vision::CheckedImage;

/// Result page for one submission, rendered and discarded per request
#[derive(Debug, Clone)]
pub struct ResultPage {
    pub euid: String,
    pub first: CheckedImage,
    pub second: CheckedImage,
}

impl ResultPage {
    pub fn new(euid: impl Into<String>, first: CheckedImage, second: CheckedImage) -> Self {
        Self {
            euid: euid.into(),
            first,
            second,
        }
    }

    /// Render the page as HTML
    ///
    /// The EUID is user input and is escaped; verdicts and data URIs are
    /// produced by the service.
    pub fn render(&self) -> String {
        let euid = ammonia::clean_text(&self.euid);

        format!(
            r#"<html>
  <body>
    <h2>Hello, {euid}!</h2>
    <hr/>
    <table>
      <tr>
        <th>{verdict1}</th>
        <th>{verdict2}</th>
      </tr>
      <tr>
        <td><img src="{src1}" alt="First Image" height="250"/></td>
        <td><img src="{src2}" alt="Second Image" height="250"/></td>
      </tr>
    </table>
    <hr/>
    <a href="/">Try another</a>
  </body>
</html>
"#,
            euid = euid,
            verdict1 = self.first.verdict.headline(),
            verdict2 = self.second.verdict.headline(),
            src1 = self.first.data_uri(),
            src2 = self.second.data_uri(),
        )
    }
}
