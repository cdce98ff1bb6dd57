use std::collections::HashMap;

use log::trace;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, first_lexeme},
        parser::node::{Node, Span},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Identifies a rule inside the grammar that declared it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleId(usize);

/// The matching strategy of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Matches one lexeme. An optional terminal matches the empty string when
    /// the lexeme is absent.
    Terminal {
        /// The expected lexeme kind.
        lexeme:   Lexeme,
        /// Whether the terminal may match nothing.
        optional: bool,
    },
    /// Matches every rule in order, each starting where the previous ended.
    Sequence(Vec<RuleId>),
    /// Tries every rule from the same offset and keeps the first success.
    Alternative(Vec<RuleId>),
}

impl Matcher {
    fn references(&self) -> &[RuleId] {
        match self {
            Self::Terminal { .. } => &[],
            Self::Sequence(rules) | Self::Alternative(rules) => rules,
        }
    }
}

/// Where and why a match attempt stopped.
///
/// A failed match never advances the caller's offset; `position` only
/// records how far matching got before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failure {
    /// Byte offset at which matching stopped.
    pub position: usize,
    /// The rule that could not be matched there.
    pub expected: &'static str,
}

impl Failure {
    /// Keeps the failure that got furthest; on a tie the later one wins.
    const fn deepest(self, previous: Option<Self>) -> Self {
        match previous {
            Some(previous) if previous.position > self.position => previous,
            _ => self,
        }
    }

    /// Converts the failure into a parse error describing the input at the
    /// failure position.
    #[must_use]
    pub fn into_error(self, source: &str) -> ParseError {
        match source.get(self.position..).and_then(|rest| rest.chars().next()) {
            Some(found) => ParseError::UnexpectedToken { expected: self.expected,
                                                         found:    found.to_string(),
                                                         position: self.position, },
            None => ParseError::UnexpectedEndOfInput { expected: self.expected,
                                                       position: self.position, },
        }
    }
}

struct Rule {
    name:    &'static str,
    matcher: Matcher,
}

/// Incrementally declares the rules of a grammar.
///
/// Rules may reference each other before they are defined: [`declare`]
/// reserves an id that [`define`] binds later, which is how recursive rules
/// are wired. [`build`] checks that every reserved id was bound.
///
/// [`declare`]: GrammarBuilder::declare
/// [`define`]: GrammarBuilder::define
/// [`build`]: GrammarBuilder::build
#[derive(Default)]
pub struct GrammarBuilder {
    rules: Vec<(&'static str, Option<Matcher>)>,
}

impl GrammarBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves a rule whose matcher is supplied later with [`define`].
    ///
    /// [`define`]: GrammarBuilder::define
    pub fn declare(&mut self, name: &'static str) -> RuleId {
        self.rules.push((name, None));
        RuleId(self.rules.len() - 1)
    }

    /// Binds the matcher of a previously declared rule, replacing any
    /// earlier definition.
    pub fn define(&mut self, id: RuleId, matcher: Matcher) {
        if let Some((_, slot)) = self.rules.get_mut(id.0) {
            *slot = Some(matcher);
        }
    }

    /// Declares and defines a rule in one step.
    pub fn rule(&mut self, name: &'static str, matcher: Matcher) -> RuleId {
        self.rules.push((name, Some(matcher)));
        RuleId(self.rules.len() - 1)
    }

    /// Adds a terminal that must match `lexeme`.
    pub fn terminal(&mut self, name: &'static str, lexeme: Lexeme) -> RuleId {
        self.rule(name,
                  Matcher::Terminal { lexeme,
                                      optional: false })
    }

    /// Adds a terminal that matches `lexeme` or nothing.
    pub fn optional(&mut self, name: &'static str, lexeme: Lexeme) -> RuleId {
        self.rule(name,
                  Matcher::Terminal { lexeme,
                                      optional: true })
    }

    /// Adds a sequence of rules.
    pub fn sequence(&mut self,
                    name: &'static str,
                    steps: impl IntoIterator<Item = RuleId>)
                    -> RuleId {
        self.rule(name, Matcher::Sequence(steps.into_iter().collect()))
    }

    /// Adds an ordered alternative of rules.
    pub fn alternative(&mut self,
                       name: &'static str,
                       branches: impl IntoIterator<Item = RuleId>)
                       -> RuleId {
        self.rule(name, Matcher::Alternative(branches.into_iter().collect()))
    }

    /// Finalizes the grammar with `start` as its entry rule.
    ///
    /// # Errors
    /// Returns `ParseError::UndefinedRule` if a declared rule was never
    /// defined, or if a rule references an id unknown to this builder.
    pub fn build(self, start: RuleId) -> ParseResult<Grammar> {
        let count = self.rules.len();
        let mut rules = Vec::with_capacity(count);

        for (name, matcher) in self.rules {
            let matcher =
                matcher.ok_or_else(|| ParseError::UndefinedRule { name: name.to_string() })?;
            if let Some(unknown) = matcher.references().iter().find(|id| id.0 >= count) {
                return Err(ParseError::UndefinedRule { name: format!("#{}", unknown.0) });
            }
            rules.push(Rule { name, matcher });
        }

        if start.0 >= count {
            return Err(ParseError::UndefinedRule { name: format!("#{}", start.0) });
        }

        Ok(Grammar { rules, start })
    }
}

/// An immutable set of mutually recursive rules with a designated entry
/// rule.
///
/// Matching is pure: a grammar holds no state that changes while parsing,
/// so one grammar can serve any number of parses, including concurrent ones.
pub struct Grammar {
    rules: Vec<Rule>,
    start: RuleId,
}

/// The outcome of matching one rule at one offset.
pub type MatchResult<'src> = Result<(Node<'src>, usize), Failure>;

/// Expected-rule name reported for a `RuleId` this grammar never issued.
const UNKNOWN_RULE: &str = "<unknown rule>";

/// Results remembered for the duration of a single match call.
///
/// Failures of composite rules are kept by `(rule, offset)`. Successful
/// matches are kept only once a failing sequence gives them up, and are
/// handed out again at most once, so no subtree is ever copied.
#[derive(Default)]
struct Memo<'src> {
    failures:  HashMap<(RuleId, usize), Failure>,
    discarded: HashMap<(RuleId, usize), (Node<'src>, usize)>,
    chosen:    HashMap<(RuleId, usize), RuleId>,
}

impl<'src> Memo<'src> {
    /// Keeps a match dropped by a failing sequence.
    ///
    /// Alternative wrappers are peeled off down to the branch that matched,
    /// since a later attempt may reach the same branch through another rule.
    fn discard(&mut self, mut id: RuleId, position: usize, mut node: Node<'src>, end: usize) {
        while let Some(&branch) = self.chosen.get(&(id, position))
              && let Some(child) = node.take_branch()
        {
            node = child;
            id = branch;
        }
        self.discarded.insert((id, position), (node, end));
    }
}

/// A composite rule waiting for the result of one of its parts.
enum Frame<'src> {
    Sequence {
        id:       RuleId,
        start:    usize,
        /// Offset where the next step begins.
        next:     usize,
        children: Vec<Node<'src>>,
        /// Start offset of every matched child.
        offsets:  Vec<usize>,
    },
    Alternative {
        id:      RuleId,
        start:   usize,
        branch:  usize,
        deepest: Option<Failure>,
    },
}

/// What the matching loop does next.
enum Step<'src> {
    /// Match a rule at an offset.
    Call(RuleId, usize),
    /// Hand a result to the innermost waiting frame.
    Return(MatchResult<'src>),
}

impl Grammar {
    /// Parses the whole of `source` with the entry rule.
    ///
    /// # Errors
    /// - `UnexpectedToken` / `UnexpectedEndOfInput` for the deepest failure
    ///   if the entry rule does not match.
    /// - `UnexpectedTrailingTokens` if the entry rule matched only a prefix.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     error::ParseError,
    ///     interpreter::{lexer::Lexeme, parser::core::GrammarBuilder},
    /// };
    ///
    /// let mut builder = GrammarBuilder::new();
    /// let int = builder.terminal("Int", Lexeme::Int);
    /// let plus = builder.terminal("Plus", Lexeme::Plus);
    /// let sum = builder.sequence("Sum", [int, plus, int]);
    /// let grammar = builder.build(sum).unwrap();
    ///
    /// let tree = grammar.parse("1+2").unwrap();
    /// assert_eq!(tree.name(), "Sum");
    /// assert_eq!(tree.children().len(), 3);
    ///
    /// assert!(matches!(grammar.parse("1+2+"),
    ///                  Err(ParseError::UnexpectedTrailingTokens { position: 3, .. })));
    /// ```
    pub fn parse<'src>(&self, source: &'src str) -> ParseResult<Node<'src>> {
        let (tree, next) = self.match_prefix(source).map_err(|f| f.into_error(source))?;

        if next != source.len() {
            return Err(ParseError::UnexpectedTrailingTokens { token:    source[next..].to_string(),
                                                              position: next, });
        }

        Ok(tree)
    }

    /// Matches the entry rule at the start of `source`, returning the tree
    /// and the offset just past it.
    ///
    /// # Errors
    /// Returns the deepest [`Failure`] if the entry rule does not match.
    pub fn match_prefix<'src>(&self, source: &'src str) -> MatchResult<'src> {
        self.match_rule(self.start, source, 0)
    }

    /// Matches `id` at byte offset `position` of `source`.
    ///
    /// On success returns the node and the offset just past it. On failure
    /// the caller's offset is unaffected and the returned [`Failure`] tells
    /// how far matching got.
    ///
    /// Pending rules are kept on a heap-allocated stack rather than the call
    /// stack, so input size is limited by memory only. Every `(rule, offset)`
    /// pair is matched a bounded number of times per call.
    ///
    /// # Errors
    /// Returns the deepest [`Failure`] if the rule does not match, or a
    /// failure expecting `<unknown rule>` if `id` belongs to another grammar.
    pub fn match_rule<'src>(&self,
                            id: RuleId,
                            source: &'src str,
                            position: usize)
                            -> MatchResult<'src> {
        let mut memo = Memo::default();
        let mut frames = Vec::new();
        let mut step = Step::Call(id, position);

        loop {
            step = match step {
                Step::Call(id, position) => self.call(id, source, position, &mut memo, &mut frames),
                Step::Return(result) => match frames.pop() {
                    Some(frame) => self.resume(frame, result, &mut memo, &mut frames),
                    None => return result,
                },
            };
        }
    }

    /// Starts matching `id`: terminals and remembered results resolve at
    /// once, composite rules push a frame and call their first part.
    fn call<'src>(&self,
                  id: RuleId,
                  source: &'src str,
                  position: usize,
                  memo: &mut Memo<'src>,
                  frames: &mut Vec<Frame<'src>>)
                  -> Step<'src> {
        let Some(rule) = self.rules.get(id.0) else {
            return Step::Return(Err(Failure { position,
                                              expected: UNKNOWN_RULE }));
        };

        if let Some(failure) = memo.failures.get(&(id, position)) {
            return Step::Return(Err(*failure));
        }
        if let Some(found) = memo.discarded.remove(&(id, position)) {
            trace!("{} reused [{position}, {})", rule.name, found.1);
            return Step::Return(Ok(found));
        }

        match &rule.matcher {
            Matcher::Terminal { lexeme, optional } => {
                let result = Self::match_terminal(rule.name, *lexeme, *optional, source, position);
                self.finish(id, position, result, memo)
            },
            Matcher::Sequence(steps) => match steps.first() {
                Some(&first) => {
                    frames.push(Frame::Sequence { id,
                                                  start: position,
                                                  next: position,
                                                  children: Vec::with_capacity(steps.len()),
                                                  offsets: Vec::with_capacity(steps.len()) });
                    Step::Call(first, position)
                },
                None => {
                    let node = Node::sequence(rule.name, position, Vec::new());
                    self.finish(id, position, Ok((node, position)), memo)
                },
            },
            Matcher::Alternative(branches) => match branches.first() {
                Some(&first) => {
                    frames.push(Frame::Alternative { id,
                                                     start: position,
                                                     branch: 0,
                                                     deepest: None });
                    Step::Call(first, position)
                },
                None => self.finish(id,
                                    position,
                                    Err(Failure { position,
                                                  expected: rule.name }),
                                    memo),
            },
        }
    }

    /// Feeds the result of a part to the frame that asked for it.
    fn resume<'src>(&self,
                    frame: Frame<'src>,
                    result: MatchResult<'src>,
                    memo: &mut Memo<'src>,
                    frames: &mut Vec<Frame<'src>>)
                    -> Step<'src> {
        match frame {
            Frame::Sequence { id,
                              start,
                              next,
                              mut children,
                              mut offsets, } => {
                let steps = self.parts(id);
                match result {
                    Ok((child, after)) => {
                        children.push(child);
                        offsets.push(next);

                        if let Some(&step) = steps.get(children.len()) {
                            frames.push(Frame::Sequence { id,
                                                          start,
                                                          next: after,
                                                          children,
                                                          offsets });
                            return Step::Call(step, after);
                        }
                        let node = Node::sequence(self.rule_name(id), start, children);
                        self.finish(id, start, Ok((node, after)), memo)
                    },
                    Err(failure) => {
                        let ends = offsets.iter().skip(1).copied().chain([next]);
                        for (((child, &offset), end), &step) in
                            children.into_iter().zip(&offsets).zip(ends).zip(steps)
                        {
                            memo.discard(step, offset, child, end);
                        }
                        self.finish(id, start, Err(failure), memo)
                    },
                }
            },
            Frame::Alternative { id,
                                 start,
                                 branch,
                                 deepest, } => {
                let branches = self.parts(id);
                match result {
                    Ok((child, after)) => {
                        if let Some(&chosen) = branches.get(branch) {
                            memo.chosen.insert((id, start), chosen);
                        }
                        let node = Node::Alternative { name:  self.rule_name(id),
                                                       child: Box::new(child), };
                        self.finish(id, start, Ok((node, after)), memo)
                    },
                    Err(failure) => {
                        let deepest = failure.deepest(deepest);
                        match branches.get(branch + 1) {
                            Some(&next) => {
                                frames.push(Frame::Alternative { id,
                                                                 start,
                                                                 branch: branch + 1,
                                                                 deepest: Some(deepest) });
                                Step::Call(next, start)
                            },
                            None => self.finish(id, start, Err(deepest), memo),
                        }
                    },
                }
            },
        }
    }

    /// Logs the outcome of `id` at `position` and remembers composite
    /// failures.
    fn finish<'src>(&self,
                    id: RuleId,
                    position: usize,
                    result: MatchResult<'src>,
                    memo: &mut Memo<'src>)
                    -> Step<'src> {
        let name = self.rule_name(id);
        match &result {
            Ok((_, next)) => trace!("{name} matched [{position}, {next})"),
            Err(failure) => {
                trace!("{name} failed at {position} (deepest: {} at {})",
                       failure.expected,
                       failure.position);
                if !self.parts(id).is_empty() {
                    memo.failures.insert((id, position), *failure);
                }
            },
        }

        Step::Return(result)
    }

    fn rule_name(&self, id: RuleId) -> &'static str {
        self.rules.get(id.0).map_or(UNKNOWN_RULE, |rule| rule.name)
    }

    fn parts(&self, id: RuleId) -> &[RuleId] {
        self.rules
            .get(id.0)
            .map(|rule| rule.matcher.references())
            .unwrap_or_default()
    }

    fn match_terminal<'src>(name: &'static str,
                            lexeme: Lexeme,
                            optional: bool,
                            source: &'src str,
                            position: usize)
                            -> MatchResult<'src> {
        let found = source.get(position..).and_then(first_lexeme);

        match found {
            Some((kind, len)) if kind == lexeme => {
                let end = position + len;
                Ok((Node::Terminal { name,
                                     span: Span::new(position, end),
                                     text: &source[position..end] },
                    end))
            },
            _ if optional => Ok((Node::Terminal { name,
                                                  span: Span::empty(position),
                                                  text: "" },
                                 position)),
            _ => Err(Failure { position,
                               expected: name }),
        }
    }
}
