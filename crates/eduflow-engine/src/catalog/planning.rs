use super::{preamble, AgentDefinition};
use crate::curriculum::{CurriculumSource, CurriculumStage};
use crate::prompts::EDUCATOR;
use crate::stage::Prompt;
use crate::stages::{FinalizeStage, Flag, PromptStage, ResultCompiler};
use eduflow_core::Capabilities;
use std::sync::Arc;

const CURRICULUM_ANALYSIS: &str = "\
Analyze curriculum alignment for lesson planning:
Topic: {prompt}
Grades: {grades}
Content Source: {content_source}
Languages: {languages}

{curriculum_context}

Analysis requirements:
1. Identify relevant curriculum standards for each grade
2. Map learning objectives to curriculum requirements
3. Determine prerequisite knowledge and skills
4. Identify cross-curricular connections
5. Note assessment expectations
6. Consider scope and sequence alignment

Provide detailed curriculum analysis for lesson planning.";

const LEARNING_OBJECTIVES: &str = "\
Define comprehensive learning objectives:
Topic: {prompt}
Grades: {grades}
Curriculum Analysis: {curriculum_analysis}

Create learning objectives that are:
1. Specific and measurable
2. Grade-appropriate and differentiated
3. Aligned with curriculum standards
4. Bloom's taxonomy compliant
5. Observable and assessable
6. Culturally relevant

Format objectives by grade level and cognitive domain.";

const DIFFERENTIATION: &str = "\
Plan differentiation strategies for multi-grade classroom:
Grades: {grades}
Learning Objectives: {learning_objectives}

Differentiation planning:
1. Content differentiation by grade level
2. Process variations for different learning styles
3. Product options for diverse abilities
4. Learning environment adaptations
5. Grouping strategies for multi-grade classes
6. Individual accommodation strategies

Create comprehensive differentiation plan.";

const ACTIVITY_SEQUENCE: &str = "\
Sequence learning activities for the lesson:
Topic: {prompt}
Intended Duration: {duration}
Learning Objectives: {learning_objectives}
Differentiation Strategy: {differentiation_strategy}

Activity sequencing:
1. Opening/engagement activities
2. Direct instruction segments
3. Guided practice activities
4. Independent work opportunities
5. Collaborative learning experiences
6. Closure and reflection activities

Sequence activities with timing and transitions.";

const ASSESSMENT_PLAN: &str = "\
Plan comprehensive assessments:
Learning Objectives: {learning_objectives}
Activity Sequence: {activity_sequence}
Grades: {grades}

Assessment planning:
1. Formative assessment strategies
2. Summative assessment design
3. Grade-specific assessment criteria
4. Rubrics and scoring guides
5. Alternative assessment options
6. Self and peer assessment opportunities

Create detailed assessment plan.";

const RESOURCE_PLAN: &str = "\
Plan resources and materials needed:
Activity Sequence: {activity_sequence}
Assessment Plan: {assessment_plan}
Grades: {grades}
Languages: {languages}

Resource planning:
1. Teaching materials and supplies
2. Technology requirements
3. Reference materials and books
4. Visual aids and manipulatives
5. Preparation time and setup needs
6. Alternative resources for limited settings

Create comprehensive resource list.";

const TIMELINE: &str = "\
Create detailed lesson timeline:
Activity Sequence: {activity_sequence}
Resource Plan: {resource_plan}

Timeline creation:
1. Detailed minute-by-minute schedule
2. Transition time allocations
3. Differentiation time blocks
4. Assessment checkpoints
5. Flexibility and adjustment points
6. Extension and enrichment timing

Compile comprehensive lesson plan with all components.";

const LESSON_PLAN: &str = "\
COMPREHENSIVE LESSON PLAN

Topic: {prompt}
Grades: {grades}
Languages: {languages}
Content Source: {content_source_upper}

{response}

SUPPORTING COMPONENTS:

Learning Objectives:
{learning_objectives}

Differentiation Strategies:
{differentiation_strategy}

Assessment Plan:
{assessment_plan}

Resource Requirements:
{resource_plan}";

pub fn lesson_planner(curriculum: Arc<dyn CurriculumSource>) -> AgentDefinition {
    let workflow = preamble("lesson-planner")
        .input("duration")
        .stage(CurriculumStage::new(curriculum))
        .stage(PromptStage::new(
            "curriculum_analysis",
            "curriculum_analysis",
            Prompt::new(EDUCATOR, CURRICULUM_ANALYSIS),
            "Curriculum alignment analyzed",
        ))
        .stage(PromptStage::new(
            "learning_objectives",
            "learning_objectives",
            Prompt::new(
                "You are an expert instructional designer specializing in learning objective development.",
                LEARNING_OBJECTIVES,
            ),
            "Learning objectives defined",
        ))
        .stage(PromptStage::new(
            "differentiation_planning",
            "differentiation_strategy",
            Prompt::new(
                "You are an expert in differentiated instruction and multi-grade teaching strategies.",
                DIFFERENTIATION,
            ),
            "Differentiation strategies planned",
        ))
        .stage(PromptStage::new(
            "activity_sequencing",
            "activity_sequence",
            Prompt::new(
                "You are an expert in pedagogical sequencing and activity design.",
                ACTIVITY_SEQUENCE,
            ),
            "Learning activities sequenced",
        ))
        .stage(PromptStage::new(
            "assessment_planning",
            "assessment_plan",
            Prompt::new(
                "You are an expert in educational assessment and evaluation.",
                ASSESSMENT_PLAN,
            ),
            "Assessment strategies planned",
        ))
        .stage(PromptStage::new(
            "resource_planning",
            "resource_plan",
            Prompt::new(
                "You are an expert in educational resource planning and classroom management.",
                RESOURCE_PLAN,
            ),
            "Resources and materials planned",
        ))
        .stage(
            ResultCompiler::new(
                "timeline_creation",
                LESSON_PLAN,
                "Lesson timeline and final plan created",
            )
            .closing(Prompt::new(
                "You are an expert lesson planner specializing in time management and pacing.",
                TIMELINE,
            ))
            .flag("lesson_type", Flag::text("comprehensive_multi_grade_plan"))
            .flag("grades_covered", Flag::Grades)
            .flag("duration_estimated", Flag::text("45-60 minutes"))
            .flag("includes_differentiation", Flag::yes())
            .flag("includes_assessment", Flag::yes())
            .flag("resource_requirements", Flag::text("detailed")),
        )
        .stage(FinalizeStage);

    AgentDefinition {
        id: "lesson-planner",
        name: "AI Lesson Planner",
        capabilities: Capabilities::new(
            "Create comprehensive, adaptive lesson plans",
            &[
                "Multi-grade lesson planning",
                "Curriculum alignment (NCERT/External)",
                "Differentiated instruction strategies",
                "Assessment integration",
                "Resource planning",
                "Timeline and pacing guides",
                "Activity sequencing",
                "Learning objective mapping",
            ],
            &["detailed_plan", "timeline", "activity_guide", "assessment_rubric"],
            &["multi_grade_adaptation", "curriculum_alignment", "differentiated_learning"],
        ),
        workflow,
    }
}

const QUESTION_ANALYSIS: &str = "\
Analyze the educational question:
Question: {prompt}
Grade Levels: {grades}
Languages: {languages}

Question Analysis:
1. Identify the core concept being asked about
2. Determine the complexity level needed
3. Assess prior knowledge assumptions
4. Identify potential misconceptions
5. Note cultural context considerations
6. Suggest analogy opportunities

Provide comprehensive question analysis.";

const ANSWER_RESEARCH: &str = "\
Research comprehensive answer:
Question: {prompt}
Question Analysis: {question_analysis}
Grade Levels: {grades}

{curriculum_context}

Research Requirements:
1. Provide accurate, factual information
2. Include grade-appropriate depth
3. Cover key concepts thoroughly
4. Address common misconceptions
5. Include relevant examples
6. Consider multiple perspectives

Provide comprehensive, accurate answer.";

const ANALOGIES: &str = "\
Create powerful analogies for explanation:
Question: {prompt}
Answer Content: {researched_answer}
Grade Levels: {grades}
Languages: {languages}

Analogy Creation:
1. Identify complex concepts needing analogies
2. Create culturally relevant comparisons
3. Use familiar Indian contexts and experiences
4. Ensure age-appropriate analogies
5. Make abstract concepts concrete
6. Include multiple analogies for different learning styles

Create engaging, culturally relevant analogies.";

const RESPONSE_FORMATTING: &str = "\
Format comprehensive educational response:
Original Question: {prompt}
Researched Answer: {researched_answer}
Analogies: {analogies}
Target Grades: {grades}
Languages: {languages}

Response Formatting:
1. Clear, direct answer to the question
2. Integration of relevant analogies
3. Grade-appropriate language and examples
4. Multilingual elements if requested
5. Interactive elements and follow-up questions
6. Additional resources and exploration suggestions

Create engaging, comprehensive educational response.";

pub fn knowledge_base(curriculum: Arc<dyn CurriculumSource>) -> AgentDefinition {
    let workflow = preamble("knowledge-base")
        .stage(CurriculumStage::new(curriculum))
        .stage(PromptStage::new(
            "question_analysis",
            "question_analysis",
            Prompt::new(
                "You are an expert educational analyst specializing in question comprehension and learning needs assessment.",
                QUESTION_ANALYSIS,
            ),
            "Question analyzed for learning needs",
        ))
        .stage(PromptStage::new(
            "answer_research",
            "researched_answer",
            Prompt::new(EDUCATOR, ANSWER_RESEARCH),
            "Comprehensive answer researched",
        ))
        .stage(PromptStage::new(
            "analogy_creation",
            "analogies",
            Prompt::new(
                "You are an expert in creating educational analogies and metaphors, specializing in Indian cultural contexts.",
                ANALOGIES,
            ),
            "Cultural analogies created for explanation",
        ))
        .stage(
            ResultCompiler::new(
                "response_formatting",
                "{response}",
                "Comprehensive response formatted with analogies",
            )
            .closing(Prompt::new(
                "You are an expert educational communicator specializing in clear, engaging explanations with analogies.",
                RESPONSE_FORMATTING,
            ))
            .flag("response_type", Flag::text("knowledge_base_answer_with_analogies"))
            .flag("includes_analogies", Flag::yes())
            .flag("cultural_context", Flag::text("indian_educational_context"))
            .flag("grade_appropriate", Flag::yes())
            .flag("multilingual_support", Flag::Multilingual),
        )
        .stage(FinalizeStage);

    AgentDefinition {
        id: "knowledge-base",
        name: "Instant Knowledge Base",
        capabilities: Capabilities::new(
            "Answer educational questions with culturally grounded analogies",
            &[
                "NCERT textbook integration",
                "Bilingual question answering",
                "Analogy-rich explanations",
                "Grade-appropriate responses",
                "Cultural context integration",
                "Follow-up question generation",
                "Multi-language support",
            ],
            &["comprehensive_answer", "analogy_teaching", "structured_qa"],
            &["educational_synthesis", "cultural_adaptation", "knowledge_retrieval"],
        ),
        workflow,
    }
}
