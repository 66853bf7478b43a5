//! Prompt construction for the analysis and rewrite calls
//!
//! The analysis prompt stipulates the heading/field template the extraction
//! layer expects. The template is a soft contract only; the extraction
//! layer tolerates deviations rather than trusting this format.

use crate::types::AnalysisRequest;

/// System prompt for the line-by-line analysis call
pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are a senior commercial contracts attorney \
with 25+ years of experience at a top-tier law firm. You specialize in strict line-by-line \
contract analysis, risk assessment, and legal strategy for high-stakes business agreements. \
You go through contracts systematically, line by line, providing detailed analysis for each \
sentence. Always format your output with proper spacing between each subheading for clarity.";

/// System prompt for the clause-rewrite call
pub const REWRITE_SYSTEM_PROMPT: &str = "You are a senior commercial contracts attorney \
with 20+ years of experience drafting high-stakes business agreements. You specialize in \
creating legally sound, professionally worded contract clauses that protect both parties \
while maintaining clarity and enforceability.";

/// Build the analysis prompt for one contract
pub fn analysis_prompt(request: &AnalysisRequest) -> String {
    let mut prompt = String::new();

    prompt.push_str(ANALYSIS_INSTRUCTIONS);
    prompt.push_str("\n\n## CONTRACT CONTEXT:\n");
    prompt.push_str(&format!("- Contractor Type: {}\n", request.contractor_type));
    prompt.push_str(&format!("- Project Type: {}\n", request.project_type));
    prompt.push_str(&format!("- User Role: {}\n", request.user_role));
    prompt.push_str(&format!("- Jurisdiction: {}\n", request.jurisdiction));
    prompt.push_str(&format!("- Contract Type: {}\n", request.contract_type));

    prompt.push_str("\n## CONTRACT TEXT:\n---\n");
    prompt.push_str(&request.contract_text);
    prompt.push_str("\n---\n\n");
    prompt.push_str(ANALYSIS_CLOSING);

    prompt
}

/// Build the rewrite prompt for one clause or topic
pub fn rewrite_prompt(clause_text: &str) -> String {
    format!("{}\n\nOriginal clause or topic: {}\n\n{}", REWRITE_INSTRUCTIONS, clause_text, REWRITE_CLOSING)
}

const ANALYSIS_INSTRUCTIONS: &str = r#"Analyze the following contract line by line, examining each sentence and clause for risk, clarity, and fairness.

## STRICT ANALYSIS REQUIREMENTS:

### For Each Line/Sentence:
1. **Quote the exact contract line** (display the actual words)
2. **Risk Assessment**: Rate as High Risk, Moderate Risk, Needs Review, or Safe
3. **Detailed Analysis** based on risk level:

#### For HIGH RISK and MODERATE RISK lines:
- **Description**: Clear explanation of why this line is risky
- **Better Alternative**: Professionally drafted replacement
- **Financial Impact**: Specific monetary/liability implications with dollar amounts where possible
- **Risk if Unchanged**: Concrete consequences of leaving this line as-is
- **Legal Words Explained**: Define any complex legal terminology

#### For NEEDS REVIEW and SAFE lines:
- **Description**: Brief explanation of why this line is acceptable or needs minor review
- **Legal Words Explained**: Define any complex legal terminology

## OUTPUT FORMAT:
Use this exact structure for each line with proper spacing:

### Line [Number]: [Brief Description]

**Original Text:** [Exact quote of the line]

**Risk Level:** [High Risk/Moderate Risk/Needs Review/Safe]

**Description:** [Clear explanation of the risk or acceptability]

**Better Alternative:** [ONLY for High/Moderate Risk - professionally drafted replacement]

**Financial Impact:** [ONLY for High/Moderate Risk - specific monetary implications]

**Risk if Unchanged:** [ONLY for High/Moderate Risk - concrete consequences]

**Legal Words Explained:** [Definitions of complex terms]

## EXECUTIVE SUMMARY:
Provide a comprehensive summary at the end with:
- Risk level counts (High Risk: X, Moderate Risk: Y, Needs Review: Z, Safe: W)
- Total lines analyzed
- Overall contract assessment
- Critical issues requiring immediate attention
- Recommended negotiation priorities
- Legal compliance status"#;

const ANALYSIS_CLOSING: &str = "Analyze this contract line by line with strict precision. \
Go through each sentence systematically and provide detailed analysis for each. Count each \
line accurately for the executive summary. Ensure each subheading is properly separated with \
clear formatting.";

const REWRITE_INSTRUCTIONS: &str = r#"Write a professional legal contract clause covering the topic described below, written in precise, business-grade legal language.

The clause must be:

- Legally enforceable
- Grammatically flawless
- Clear and unambiguous
- Suitable for use between a contractor and a corporate client
- Free from logical or legal risk, vagueness, or overbroad obligations

Include:

- Realistic structure (numbered or bulleted where appropriate)
- Fair language for both parties
- Any necessary legal safeguards or definitions
- Compliance with common law standards (e.g., U.S./U.K./Canadian commercial law)"#;

const REWRITE_CLOSING: &str = "Only produce the clause - no explanations, no summaries. \
Quality must be 100% professional and client-ready.";
