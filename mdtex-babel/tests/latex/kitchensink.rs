use crate::common::{assert_well_nested, load_fixture};
use insta::assert_snapshot;
use mdtex_babel::formats::latex::{render, RenderOptions, TopLevel};
use mdtex_babel::formats::markdown::parse_to_events;

#[test]
fn test_kitchensink_events_well_nested() {
    assert_well_nested(&parse_to_events(&load_fixture("kitchensink.md")));
}

#[test]
fn test_kitchensink_latex() {
    let latex = render(&load_fixture("kitchensink.md"), &RenderOptions::default());
    assert_snapshot!(latex, @r#"
\chapter{Kitchen Sink}

Intro with \textbf{bold}, $a_1 + b$ and \cite{knuth84,lamport94}.
Costs 100\% \& more\_than \{two\}.

\section{Lists}

\begin{itemize}
\item first
\item second
\begin{enumerate}
\item nested one
\item nested two
\end{enumerate}
\item third
\end{itemize}

\begin{table}[!h]
\caption{Quarterly numbers}
\label{tab:q}
\centering
\begin{tabular}{|l|r|}
\hline
Quarter & Revenue \\
\hline
Q1 & 10\% \\
\hline
\end{tabular}
\end{table}

\begin{equation}
\label{eq:euler}
e^{i\pi} + 1 = 0
\end{equation}

\begin{figure}[!h]
\centering
\includegraphics[width=0.5\linewidth]{plot.png}
\caption{A plot}
\end{figure}

\begin{lstlisting}[language=python]
print("50%")
\end{lstlisting}

\input{appendix.tex}

% a note
\newpage
See \ref{tab:q}.
"#);
}

#[test]
fn test_kitchensink_article_options() {
    let options = RenderOptions {
        top_level: TopLevel::Section,
        keep_comments: false,
        include_extension: "latex".to_string(),
        ..RenderOptions::default()
    };
    let latex = render(&load_fixture("kitchensink.md"), &options);
    assert!(latex.starts_with("\\section{Kitchen Sink}\n"));
    assert!(latex.contains("\\subsection{Lists}\n"));
    assert!(latex.contains("\\input{appendix.latex}\n"));
    assert!(!latex.contains("% a note"));
    // passthrough does not depend on comment retention
    assert!(latex.contains("\\newpage\n"));
}
