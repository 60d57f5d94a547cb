//! Inline page styles.

pub(crate) const RESET: &str = r#"
  *,
  *::before,
  *::after {
    box-sizing: border-box;
  }

  ul[class],
  ol[class] {
    padding: 0;
  }

  body,
  h1,
  h2,
  h3,
  h4,
  p,
  ul[class],
  li,
  figure,
  figcaption,
  blockquote,
  dl,
  dd {
    margin: 0;
  }

  body {
    min-height: 100vh;
    scroll-behavior: smooth;
    text-rendering: optimizeSpeed;
    line-height: 1.5;
    touch-action: manipulation;
  }

  ul,
  ol {
    list-style: none;
  }

  a {
    text-decoration-skip-ink: auto;
    text-decoration: none;
  }

  img {
    max-width: 100%;
    display: block;
  }

  article > * + * {
    margin-top: 1em;
  }

  input,
  button,
  textarea,
  select {
    font: inherit;
  }

  form {
    margin: 0;
  }
"#;

pub(crate) const VARIABLES: &str = r#"
  :root {
    --padding-x-small: 4px;
    --padding-small: 8px;
    --padding: 16px;
    --padding-large: 32px;
    --padding-x-large: 64px;

    --text-x-small: 12px;
    --text-small: 14px;
    --text: 16px;
    --text-large: 32px;
    --text-x-large: 128px;

    --color-text: black;
    --color-background: white;
    --color-grey: rgba(0, 0, 0, 0.6);
  }
"#;

pub(crate) const STYLES: &str = r#"
  html {
    color: var(--color-text);
    background: var(--color-background);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif, "Apple Color Emoji", "Segoe UI Emoji", "Segoe UI Symbol";
    font-size: var(--text);
    -webkit-font-smoothing: antialiased;
    -moz-osx-font-smoothing: grayscale;
  }

  body {
    max-width: 500px;
    margin: 0 auto;
    padding: 0 var(--padding);
  }

  nav form {
    margin-top: var(--padding);
    display: flex;
  }

  input[type="url"] {
    font-size: var(--text-small);
    flex-grow: 1;
    background: #eeeeee;
    border: 1px solid #eeeeee;
    border-radius: 3px;
    padding: var(--padding-x-small) var(--padding-small);
    -webkit-appearance: none;
  }

  input[type="submit"] {
    background: none;
    font-size: var(--text-small);
    color: #4C51BF;
    border: none;
    padding: var(--padding-small);
  }

  header {
    padding: var(--padding) 0 var(--padding-small) 0;
  }

  ul {
    margin: 0;
    padding: 0;
  }

  li {
    border-bottom: 1px solid #eeeeee;
    padding: var(--padding) 0;
  }

  a {
    color: #4C51BF;
  }

  .cta {
    display: block;
    background: var(--color-text);
    color: var(--color-background);
    text-align: center;
    padding: var(--padding-small);
    margin: var(--padding-large) 0;
    border-radius: 5px;
  }

  h1, h2 {
    font-weight: bold;
  }

  h1 {
    font-size: var(--text-large);
  }

  h2 {
    font-size: var(--text);
    margin-bottom: var(--padding);
  }

  p {
    font-size: var(--text-small);
  }

  .breadcrumbs {
    display: flex;
    align-items: center;
    margin: 0 0 var(--padding) 0;
  }

  .breadcrumbs li {
    border: none;
    padding: 0;
  }

  .breadcrumbs li:not(:last-child):after {
    content: '›';
    color: rgba(0, 0, 0, 0.4);
    margin: 0 var(--padding-x-small);
  }

  .breadcrumbs li a {
    text-transform: uppercase;
    font-size: var(--text-x-small);
    color: var(--color-grey);
  }

  .breadcrumbs li:last-child {
    font-weight: bold;
  }
"#;
