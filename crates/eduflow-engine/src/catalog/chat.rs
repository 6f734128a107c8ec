use super::{preamble, AgentDefinition};
use crate::prompts::EDUCATOR;
use crate::stage::Prompt;
use crate::stages::{FinalizeStage, Flag, PromptStage, ResultCompiler, RouterStage};
use eduflow_core::Capabilities;

const CLASSIFICATION: &str = "\
Classify the educational intent and recommend appropriate agent(s):

User Message: {prompt}
Context: Grades {grades}, Languages: {languages}

Available Agents and Capabilities:
@DIRECTORY@

Analysis Requirements:
1. Identify the primary educational intent
2. Determine task complexity (single vs multi-agent)
3. Recommend the most appropriate agent(s)
4. Suggest task decomposition if needed
5. Consider grade-level appropriateness
6. Note any special requirements

Provide intent classification and routing recommendations.";

const ROUTING: &str = "\
Based on the intent classification, provide specific routing guidance:

Intent Analysis: {intent_classification}
User Request: {prompt}

Routing Decision:
1. Identify the primary agent to handle this request
2. Determine if multiple agents are needed
3. Specify the sequence of agent interactions
4. Define handoff criteria between agents
5. Set success criteria for the routing

Provide clear routing instructions, naming agents by id.";

const RESPONSE: &str = "\
Generate a comprehensive educational response:

User Request: {prompt}
Intent Classification: {intent_classification}
Routing Decision: {routing_decision}

Response should include:
1. Direct answer to the user's question
2. Educational context and background
3. Grade-level appropriate explanations
4. Practical implementation guidance
5. Additional resources and suggestions
6. Next steps or follow-up recommendations

Provide a helpful, comprehensive educational response.";

/// `directory` lists `(id, primary function)` for every engine the chatbot may recommend.
pub fn master_chatbot(directory: &[(String, String)]) -> AgentDefinition {
    let listing = directory
        .iter()
        .map(|(id, function)| format!("- {}: {}", id, function))
        .collect::<Vec<_>>()
        .join("\n");
    let known = directory.iter().map(|(id, _)| id.clone()).collect();

    let workflow = preamble("master-chatbot")
        .stage(PromptStage::new(
            "intent_classification",
            "intent_classification",
            Prompt::new(
                "You are an expert educational AI coordinator specializing in task analysis and agent routing.",
                CLASSIFICATION.replace("@DIRECTORY@", &listing),
            ),
            "User intent classified and routing determined",
        ))
        .stage(RouterStage::new(
            "agent_routing",
            "routing_decision",
            Prompt::new(
                "You are an expert in educational workflow orchestration and agent coordination.",
                ROUTING,
            ),
            known,
            "Agent routing decisions made",
        ))
        .stage(
            ResultCompiler::new(
                "response_generation",
                "{response}",
                "Comprehensive educational response generated",
            )
            .closing(Prompt::new(EDUCATOR, RESPONSE))
            .flag("response_type", Flag::text("master_chatbot_guidance"))
            .flag("intent_classification", Flag::Metadata("intent_classification".into()))
            .flag("routing_recommendations", Flag::Metadata("routing_decision".into()))
            .flag(RouterStage::RECOMMENDED, Flag::Metadata(RouterStage::RECOMMENDED.into()))
            .flag("grades_addressed", Flag::Grades)
            .flag("languages_supported", Flag::Languages),
        )
        .stage(FinalizeStage);

    AgentDefinition {
        id: "master-chatbot",
        name: "Master Educational Chatbot",
        capabilities: Capabilities::new(
            "Route requests and manage educational context",
            &[
                "Intelligent agent routing",
                "Context management",
                "Educational conversation management",
                "Task decomposition and delegation",
                "Unified response compilation",
            ],
            &["conversational", "structured_guidance", "agent_recommendations"],
            &["agent_routing", "context_management", "educational_guidance"],
        ),
        workflow,
    }
}
