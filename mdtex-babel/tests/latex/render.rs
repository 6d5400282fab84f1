use insta::assert_snapshot;
use mdtex_babel::format::Format;
use mdtex_babel::formats::latex::{render, LatexFormat, RenderOptions};
use mdtex_babel::registry::FormatRegistry;
use std::collections::HashMap;

fn latex(source: &str) -> String {
    render(source, &RenderOptions::default())
}

#[test]
fn test_directive_consumed_by_next_image_only() {
    let out = latex(
        "<!-- set caption=\"Fig A\" label=\"fig:1\" -->\n\
         ![alt one](a.png)\n\
         ![alt two](b.png)\n",
    );
    assert_snapshot!(out, @r"
\begin{figure}[!h]
\centering
\includegraphics[width=0.5\linewidth]{a.png}
\caption{Fig A}
\label{fig:1}
\end{figure}
\begin{figure}[!h]
\centering
\includegraphics[width=0.5\linewidth]{b.png}
\caption{alt two}
\end{figure}
");
}

#[test]
fn test_table_discards_image_keys() {
    let out = latex(
        "<!-- set width=\"0.9\" float=\"h\" -->\n\
         | a |\n\
         \n\
         ![x](x.png)\n",
    );
    assert!(out.starts_with("\\begin{table}[!h]\n\\caption{}\n\\centering\n\\begin{tabular}{c}\n"));
    assert!(out.contains("\\includegraphics[width=0.5\\linewidth]{x.png}"));
}

#[test]
fn test_equation_takes_label_only() {
    let out = latex("<!-- set label=\"eq:1\" caption=\"unused\" -->\n$$\nx = 1\n$$\n| t |\n");
    assert_snapshot!(out, @r"
\begin{equation}
\label{eq:1}
x = 1
\end{equation}
\begin{table}[!h]
\caption{}
\centering
\begin{tabular}{c}
\hline
t \\
\hline
\end{tabular}
\end{table}
");
}

#[test]
fn test_raw_passthrough_block() {
    let out = latex("<!-- latex\n\\clearpage\n\\vspace{1em} % spacing\n-->\nafter\n");
    assert_eq!(out, "\\clearpage\n\\vspace{1em} % spacing\nafter\n");
}

#[test]
fn test_directive_inside_passthrough_is_literal() {
    let out = latex("<!-- latex\n<!-- set caption=\"x\" -->\n![y](y.png)\n");
    // the inner comment closes the passthrough block instead of setting a caption
    assert!(out.contains("\\caption{y}"));
}

#[test]
fn test_malformed_directive_becomes_comment() {
    let out = latex("<!-- set caption=Fig -->\n![alt](a.png)\n");
    assert!(out.starts_with("% set caption=Fig\n"));
    assert!(out.contains("\\caption{alt}"));
}

#[test]
fn test_code_is_verbatim() {
    let out = latex("```\nlet total = 100_000 & {x}; // 50%\n```\n");
    assert_eq!(
        out,
        "\\begin{lstlisting}\nlet total = 100_000 & {x}; // 50%\n\\end{lstlisting}\n"
    );
}

#[test]
fn test_list_items_share_line_with_text() {
    let out = latex("1. **first** item\n2. costs $$n^2$$\n");
    assert_eq!(
        out,
        "\\begin{enumerate}\n\\item \\textbf{first} item\n\\item costs $n^2$\n\\end{enumerate}\n"
    );
}

#[test]
fn test_trailing_comment_after_text() {
    let out = latex("Some text <!-- todo --> here\n");
    assert_eq!(out, "Some text  here\n% todo\n");
}

#[test]
fn test_registry_latex_with_overrides() {
    let registry = FormatRegistry::default();
    let options = HashMap::from([
        ("float".to_string(), "tbp".to_string()),
        ("table-columns".to_string(), "|c|c|".to_string()),
    ]);
    let out = registry
        .convert_with_options("| a | b |", "latex", &options)
        .unwrap();
    assert!(out.starts_with("\\begin{table}[tbp]\n"));
    assert!(out.contains("\\begin{tabular}{|c|c|}\n"));
}

#[test]
fn test_format_defaults_come_from_options() {
    let format = LatexFormat::new(RenderOptions {
        image_width: "0.8".to_string(),
        ..RenderOptions::default()
    });
    let out = format.convert("![a](a.png)").unwrap();
    assert!(out.contains("width=0.8\\linewidth"));
}
