//! Server-rendered todo page served at `/`.
//!
//! The page is plain HTML built from the current store contents. Mutations
//! go through the JSON API from a small inline script, which reloads the
//! page once the server accepts the change.

use std::fmt::Write as _;

use axum::{extract::State, response::Html};

use crate::api::SharedStore;
use crate::store::Todo;

const STYLE: &str = "\
body { padding: 2rem; font-family: Arial, sans-serif; }
main { max-width: 600px; margin: 0 auto; }
form { display: flex; margin-bottom: 1rem; }
form input { flex: 1; padding: 0.5rem; margin-right: 0.5rem; border: 1px solid #ccc; border-radius: 3px; }
form button { padding: 0.5rem 1rem; border: none; border-radius: 3px; background-color: #1890ff; color: white; cursor: pointer; }
.todo { display: flex; align-items: center; margin-bottom: 0.5rem; }
.todo span { flex: 1; margin-left: 0.5rem; }
.todo.completed span { text-decoration: line-through; }
.todo button { margin-left: 0.5rem; padding: 0.3rem 0.6rem; background-color: #ff4d4f; color: white; border: none; border-radius: 3px; cursor: pointer; }
";

const SCRIPT: &str = r#"
async function send(method, url, body) {
  const init = { method };
  if (body !== undefined) {
    init.headers = { "Content-Type": "application/json" };
    init.body = JSON.stringify(body);
  }
  const res = await fetch(url, init);
  if (!res.ok) throw new Error(`${method} ${url} failed with ${res.status}`);
}

const form = document.getElementById("new-todo");
form.addEventListener("submit", async (e) => {
  e.preventDefault();
  const title = form.elements.title.value;
  if (!title.trim()) return;
  const button = form.querySelector("button");
  button.disabled = true;
  button.textContent = "Adding...";
  try {
    await send("POST", "/todos", { title });
    location.reload();
  } catch (err) {
    console.error(err);
    alert("Failed to add todo");
    button.disabled = false;
    button.textContent = "Add Todo";
  }
});

for (const item of document.querySelectorAll(".todo")) {
  const id = item.dataset.id;
  const checkbox = item.querySelector("input[type=checkbox]");
  checkbox.addEventListener("change", async () => {
    checkbox.disabled = true;
    try {
      await send("PUT", `/todos/${id}`, { completed: checkbox.checked });
      location.reload();
    } catch (err) {
      console.error(err);
      alert("Failed to update todo");
      checkbox.checked = !checkbox.checked;
      checkbox.disabled = false;
    }
  });
  const del = item.querySelector("button");
  del.addEventListener("click", async () => {
    if (!confirm("Are you sure you want to delete this todo?")) return;
    del.disabled = true;
    del.textContent = "Deleting...";
    try {
      await send("DELETE", `/todos/${id}`);
      location.reload();
    } catch (err) {
      console.error(err);
      alert("Failed to delete todo");
      del.disabled = false;
      del.textContent = "Delete";
    }
  });
}
"#;

pub async fn index(State(store): State<SharedStore>) -> Html<String> {
    Html(render_page(&store.list().await))
}

/// Render the full page for `todos`, in the order given.
pub fn render_page(todos: &[Todo]) -> String {
    let mut items = String::new();
    if todos.is_empty() {
        items.push_str("<p>No todos yet. Add one below!</p>\n");
    }
    for todo in todos {
        render_item(&mut items, todo);
    }

    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<title>TODO List</title>
<meta name=\"description\" content=\"A simple TODO list.\">
<style>{STYLE}</style>
</head>
<body>
<main>
<h1>TODO List</h1>
<form id=\"new-todo\">
<input type=\"text\" name=\"title\" placeholder=\"Enter new todo\" autocomplete=\"off\">
<button type=\"submit\">Add Todo</button>
</form>
<div id=\"todos\">
{items}</div>
</main>
<script>{SCRIPT}</script>
</body>
</html>
"
    )
}

fn render_item(out: &mut String, todo: &Todo) {
    let (class, checked) = if todo.completed {
        ("todo completed", " checked")
    } else {
        ("todo", "")
    };
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "<div class=\"{class}\" data-id=\"{id}\"><input type=\"checkbox\"{checked}><span>{title}</span><button type=\"button\">Delete</button></div>",
        id = todo.id,
        title = escape_html(&todo.title),
    );
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
